use anyhow::{Context, Result};

use stockroom::admin::AdminClient;
use stockroom::config::{ConfigStore, ShopOverrides};

use crate::{Commands, ConfigCommands, require_shop};

mod catalog;
mod dispatch;
mod provision;
mod shop;
mod store;

pub(super) fn handle_command(command: Commands, overrides: &ShopOverrides) -> Result<()> {
    dispatch::handle_command(command, overrides)
}
