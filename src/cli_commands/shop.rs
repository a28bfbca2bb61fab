use clap::{Args, Subcommand};

use stockroom::model::CustomerKeyMode;

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Store origin, e.g. https://example.myshopify.com
    #[arg(long)]
    pub(crate) url: String,
    /// Admin API access token
    #[arg(long)]
    pub(crate) token: String,
    /// Admin API version (YYYY-MM)
    #[arg(long)]
    pub(crate) api_version: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the effective configuration (token redacted)
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose how checked customers are keyed
    CustomerKey {
        #[arg(value_enum)]
        mode: CustomerKeyArg,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum CustomerKeyArg {
    Id,
    Label,
}

impl From<CustomerKeyArg> for CustomerKeyMode {
    fn from(arg: CustomerKeyArg) -> Self {
        match arg {
            CustomerKeyArg::Id => CustomerKeyMode::Id,
            CustomerKeyArg::Label => CustomerKeyMode::Label,
        }
    }
}
