pub mod admin;
pub mod config;
pub mod logging;
pub mod modal;
pub mod model;
pub mod picker;
pub mod pipeline;
pub mod selection;
pub mod tui;
mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
