use stockroom::model::{DEFAULT_API_VERSION, ShopConfig};

use super::*;

pub(super) fn handle_login_command(
    store: &ConfigStore,
    url: String,
    token: String,
    api_version: Option<String>,
) -> Result<()> {
    let mut cfg = store.read_config()?;
    let url = url.trim_end_matches('/').to_string();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("shop url must start with http:// or https:// (got {})", url);
    }
    cfg.shop = Some(ShopConfig {
        base_url: url.clone(),
        api_version: api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        access_token: Some(token),
    });
    store.write_config(&cfg)?;
    println!("Logged in to {}", url);
    Ok(())
}

pub(super) fn handle_config_command(
    store: &ConfigStore,
    command: ConfigCommands,
    overrides: &ShopOverrides,
) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let mut cfg = store.read_config()?;
            // Show what a command would actually connect to, if anything.
            if let Ok(shop) = require_shop(store, overrides) {
                cfg.shop = Some(shop);
            }
            if let Some(shop) = cfg.shop.as_mut() {
                shop.access_token = shop.access_token.as_ref().map(|_| "<redacted>".to_string());
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                match &cfg.shop {
                    Some(shop) => {
                        println!("shop: {}", shop.base_url);
                        println!("api_version: {}", shop.api_version);
                        println!(
                            "access_token: {}",
                            shop.access_token.as_deref().unwrap_or("(none)")
                        );
                    }
                    None => println!("No shop configured"),
                }
                println!("customer_key: {}", cfg.selection.customer_key.as_str());
                println!("candidate_limit: {}", cfg.selection.candidate_limit);
                println!("picker_page_size: {}", cfg.picker.page_size);
            }
        }
        ConfigCommands::CustomerKey { mode } => {
            let mut cfg = store.read_config()?;
            cfg.selection.customer_key = mode.into();
            store.write_config(&cfg)?;
            println!("customer_key set to {}", cfg.selection.customer_key.as_str());
        }
    }
    Ok(())
}
