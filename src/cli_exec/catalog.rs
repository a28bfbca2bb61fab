use stockroom::picker::{PickKind, PickedResource};
use stockroom::selection::CandidateList;

use super::store::connect;
use super::*;

pub(super) fn handle_customers_command(
    store: &ConfigStore,
    overrides: &ShopOverrides,
    json: bool,
) -> Result<()> {
    let cfg = store.read_config()?;
    let client = connect(store, overrides)?;
    let candidates = CandidateList::new(cfg.selection.candidate_limit);
    let customers = candidates.load(&client)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(customers).context("serialize customers json")?
        );
        return Ok(());
    }
    if customers.is_empty() {
        println!("No customers");
        return Ok(());
    }
    for c in customers {
        println!(
            "{} {} <{}>",
            c.id.short(),
            c.display_name,
            c.email.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub(super) fn handle_products_command(
    store: &ConfigStore,
    overrides: &ShopOverrides,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    list_resources(store, overrides, PickKind::Product, limit, json)
}

pub(super) fn handle_collections_command(
    store: &ConfigStore,
    overrides: &ShopOverrides,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    list_resources(store, overrides, PickKind::Collection, limit, json)
}

fn list_resources(
    store: &ConfigStore,
    overrides: &ShopOverrides,
    kind: PickKind,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let cfg = store.read_config()?;
    let client = connect(store, overrides)?;
    let first = limit.unwrap_or(cfg.picker.page_size);
    let items: Vec<PickedResource> = match kind {
        PickKind::Product => client.list_products(first)?,
        PickKind::Collection => client.list_collections(first)?,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&items).context("serialize listing json")?
        );
        return Ok(());
    }
    if items.is_empty() {
        println!("No {}s", kind);
        return Ok(());
    }
    for item in &items {
        let id = item.id.as_ref().map(|id| id.short()).unwrap_or("?");
        println!(
            "{} {} ({})",
            id,
            item.title.as_deref().unwrap_or("(untitled)"),
            item.handle.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
