//! Customer overlay: checkbox list over the candidate customers.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::App;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let box_area = super::centered_box(frame.area(), 70, 20);
    frame.render_widget(Clear, box_area);

    let block = Block::default().borders(Borders::ALL).title(format!(
        "Select Customer (first {}, keyed by {})",
        app.candidates.limit(),
        app.selection.customer_key_mode().as_str()
    ));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let candidates = app.candidates.get();
    if candidates.is_empty() {
        frame.render_widget(Paragraph::new("No customers loaded"), parts[0]);
    } else {
        let items: Vec<ListItem> = candidates
            .iter()
            .map(|c| {
                let mark = if app.selection.is_customer_selected(c) {
                    "[x] "
                } else {
                    "[ ] "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(mark),
                    Span::raw(c.display_name.clone()),
                    Span::raw("  "),
                    Span::styled(
                        c.email.clone().unwrap_or_default(),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();
        let mut state = ListState::default();
        state.select(Some(app.modal_cursor.min(candidates.len() - 1)));
        frame.render_stateful_widget(
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            parts[0],
            &mut state,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "space: toggle  enter: save  esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
        parts[1],
    );
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let count = app.candidates.get().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.modal_cursor = app.modal_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.modal_cursor + 1 < count {
                app.modal_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            if let Some(c) = app.candidates.get().get(app.modal_cursor) {
                app.selection.toggle_customer(c);
            }
        }
        KeyCode::Enter => {
            save_customers(app);
            app.customer_modal.hide();
        }
        KeyCode::Esc => app.customer_modal.hide(),
        _ => {}
    }
}

fn save_customers(app: &mut App) {
    let names: Vec<String> = app
        .selection
        .selected_customers(app.candidates.get())
        .into_iter()
        .map(|c| c.display_name.clone())
        .collect();
    if names.is_empty() {
        app.push_log("no customers selected");
    } else {
        app.push_log(format!("customers selected: {}", names.join(", ")));
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/customer_modal_tests.rs"]
mod tests;
