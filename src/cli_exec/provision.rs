use stockroom::model::Price;
use stockroom::pipeline::{PipelineError, ProvisioningPipeline, request_or_demo};

use super::store::connect;
use super::*;

pub(super) fn handle_provision_command(
    store: &ConfigStore,
    overrides: &ShopOverrides,
    title: Option<String>,
    price: Option<Price>,
    json: bool,
) -> Result<()> {
    let client = connect(store, overrides)?;
    let request = request_or_demo(title, price)?;
    let pipeline = ProvisioningPipeline::new(client);

    match pipeline.run(&request) {
        Ok(done) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&done).context("serialize provision json")?
                );
            } else {
                println!("product: {} {}", done.parent.id, done.parent.title);
                println!("handle: {}", done.parent.handle);
                println!("variant: {}", done.child.id);
                println!("price: {}", done.child.price);
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let report = serde_json::json!({
                    "error": err.to_string(),
                    "phase": err.phase(),
                    "parent_created": err.parent_created(),
                    "product": err.parent(),
                    "run": pipeline.last_run(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize failure json")?
                );
            } else {
                print_recovery_hint(&err);
            }
            Err(anyhow::Error::new(err).context(format!("provision {:?}", request.title)))
        }
    }
}

fn print_recovery_hint(err: &PipelineError) {
    match err {
        PipelineError::ChildUpdate {
            parent, child_id, ..
        } => {
            eprintln!("product {} was created and remains in the store", parent.id);
            eprintln!("retry the price update against variant {}", child_id);
        }
        PipelineError::ChildNotFound { parent } => {
            eprintln!(
                "product {} was created and remains in the store; it has no variant to price",
                parent.id
            );
        }
        PipelineError::ParentCreation { .. } | PipelineError::RunInFlight => {}
    }
}
