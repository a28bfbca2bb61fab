use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::modal::OverlaySurface;
use crate::picker::select_into;
use crate::selection::PickOutcome;

use super::App;
use super::picker::TerminalPicker;

pub(super) const CUSTOMER_OVERLAY: &str = "customer-picker";

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_provisioning();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        // The overlay exists once the first frame is on screen.
        if !app.customer_modal.is_acquired() {
            app.customer_modal
                .acquire(OverlaySurface::new(CUSTOMER_OVERLAY));
        }
        if app.quit {
            return Ok(());
        }

        if let Some((kind, verb)) = app.pending_pick.take() {
            run_picker(terminal, app, kind, verb);
            continue;
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => app.handle_key(k),
                _ => {}
            }
        }
    }
}

fn run_picker(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    kind: crate::picker::PickKind,
    verb: crate::picker::PickVerb,
) {
    let Some(client) = app.client.clone() else {
        app.push_log(format!("cannot pick a {}: not connected", kind));
        return;
    };
    let mut picker = TerminalPicker::new(terminal, &client, app.picker_page_size);
    match select_into(&mut app.selection, &mut picker, kind, verb) {
        Ok(PickOutcome::Replaced(record)) => {
            app.push_log(format!("{} set to {}", kind, record.display_label))
        }
        Ok(PickOutcome::Unchanged) => app.push_log(format!("{} selection unchanged", kind)),
        Err(err) => app.push_log(format!("{}", err)),
    }
}
