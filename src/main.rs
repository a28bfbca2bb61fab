use anyhow::Result;

mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use self::cli_commands::{Commands, ConfigCommands};
pub(crate) use self::cli_runtime::require_shop;

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    cli_runtime::run()
}
