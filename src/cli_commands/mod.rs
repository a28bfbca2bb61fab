use clap::Subcommand;

pub(crate) mod catalog;
pub(crate) mod provision;
pub(crate) mod shop;

pub(crate) use self::shop::ConfigCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Save the shop URL and access token to .stockroom/config.json
    Login(shop::LoginArgs),

    /// Show or edit local configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List the customers offered for selection
    Customers(catalog::CustomersArgs),

    /// List products the picker would offer
    Products(catalog::ListArgs),

    /// List collections the picker would offer
    Collections(catalog::ListArgs),

    /// Create a product, then set the price of its default variant
    Provision(provision::ProvisionArgs),
}
