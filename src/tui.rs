use anyhow::Result;

use crate::config::ShopOverrides;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub overrides: ShopOverrides,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
