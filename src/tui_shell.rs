use anyhow::Result;

mod app;
mod customer_modal;
mod event_loop;
mod picker;
mod provision;
mod render;

use app::{App, Focus};

pub(crate) fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}

/// Centered box inside `area`, clamped to sensible bounds.
fn centered_box(area: ratatui::layout::Rect, max_w: u16, max_h: u16) -> ratatui::layout::Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w).min(area.width);
    let h = area.height.saturating_sub(6).clamp(8, max_h).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    }
}
