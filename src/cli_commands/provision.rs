use clap::Args;

use stockroom::model::Price;

#[derive(Args)]
pub(crate) struct ProvisionArgs {
    /// Product title (defaults to a random "<Color> Snowboard")
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Price for the default variant (defaults to a random value below 100)
    #[arg(long)]
    pub(crate) price: Option<Price>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
