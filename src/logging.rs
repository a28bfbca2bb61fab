use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STOCKROOM_LOG";

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Logs to stderr; for CLI commands whose stdout is the result.
pub fn init_stderr(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logs to a file so the TUI's alternate screen is left alone.
pub fn init_file(path: &Path, default_directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
