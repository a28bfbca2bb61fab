use anyhow::Result;
use clap::{Args, Parser};

use stockroom::config::{ConfigStore, ShopOverrides, resolve_shop};
use stockroom::model::ShopConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Pick store resources and provision test products", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    shop: ShopFlags,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ShopFlags {
    /// Store origin (overrides config and STOCKROOM_SHOP_URL)
    #[arg(long = "shop-url", global = true)]
    url: Option<String>,

    /// Admin API access token (overrides config and STOCKROOM_ACCESS_TOKEN)
    #[arg(long = "access-token", global = true)]
    token: Option<String>,

    /// Admin API version (overrides config and STOCKROOM_API_VERSION)
    #[arg(long = "shop-api-version", global = true)]
    api_version: Option<String>,
}

impl From<ShopFlags> for ShopOverrides {
    fn from(flags: ShopFlags) -> Self {
        ShopOverrides {
            url: flags.url,
            token: flags.token,
            api_version: flags.api_version,
        }
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ShopOverrides::from(cli.shop);

    match cli.command {
        None => {
            let store = ConfigStore::open_cwd()?;
            stockroom::logging::init_file(&store.log_path(), "info")?;
            stockroom::tui::run_with_options(stockroom::tui::TuiRunOptions { overrides })?;
        }
        Some(command) => {
            stockroom::logging::init_stderr("warn");
            crate::cli_exec::handle_command(command, &overrides)?
        }
    }

    Ok(())
}

pub(crate) fn require_shop(store: &ConfigStore, overrides: &ShopOverrides) -> Result<ShopConfig> {
    let cfg = store.read_config()?;
    resolve_shop(&cfg, overrides)
}
