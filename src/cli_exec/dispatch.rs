use super::catalog::{handle_collections_command, handle_customers_command, handle_products_command};
use super::provision::handle_provision_command;
use super::shop::{handle_config_command, handle_login_command};
use super::store::with_store;
use super::*;

pub(super) fn handle_command(command: Commands, overrides: &ShopOverrides) -> Result<()> {
    match command {
        Commands::Login(args) => with_store(|store| {
            handle_login_command(store, args.url, args.token, args.api_version)
        })?,
        Commands::Config { command } => {
            with_store(|store| handle_config_command(store, command, overrides))?
        }
        Commands::Customers(args) => {
            with_store(|store| handle_customers_command(store, overrides, args.json))?
        }
        Commands::Products(args) => {
            with_store(|store| handle_products_command(store, overrides, args.limit, args.json))?
        }
        Commands::Collections(args) => with_store(|store| {
            handle_collections_command(store, overrides, args.limit, args.json)
        })?,
        Commands::Provision(args) => with_store(|store| {
            handle_provision_command(store, overrides, args.title, args.price, args.json)
        })?,
    }
    Ok(())
}
