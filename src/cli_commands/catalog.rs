use clap::Args;

#[derive(Args)]
pub(crate) struct CustomersArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Number of records to fetch (defaults to the picker page size)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
