//! In-terminal resource picker. Runs its own key loop until the operator
//! confirms a row or cancels.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::admin::AdminClient;
use crate::picker::{PickKind, PickVerb, PickedResource, ResourcePicker};

pub(super) struct TerminalPicker<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
    client: &'a AdminClient,
    page_size: usize,
}

impl<'a> TerminalPicker<'a> {
    pub(super) fn new(
        terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
        client: &'a AdminClient,
        page_size: usize,
    ) -> Self {
        Self {
            terminal,
            client,
            page_size,
        }
    }
}

impl ResourcePicker for TerminalPicker<'_> {
    fn pick(&mut self, kind: PickKind, verb: PickVerb) -> Result<Option<Vec<PickedResource>>> {
        let items = match kind {
            PickKind::Product => self.client.list_products(self.page_size)?,
            PickKind::Collection => self.client.list_collections(self.page_size)?,
        };
        let title = format!("{} {}", capitalize(verb.as_str()), kind);

        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        loop {
            self.terminal
                .draw(|f| draw(f, &title, &items, &mut state))
                .context("draw picker")?;

            if !event::poll(Duration::from_millis(100)).context("poll")? {
                continue;
            }
            let Event::Key(key) = event::read().context("read event")? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                KeyCode::Up | KeyCode::Char('k') => {
                    let i = state.selected().unwrap_or(0);
                    state.select(Some(i.saturating_sub(1)));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let i = state.selected().unwrap_or(0);
                    if i + 1 < items.len() {
                        state.select(Some(i + 1));
                    }
                }
                KeyCode::Enter => {
                    let chosen = state
                        .selected()
                        .and_then(|i| items.get(i))
                        .cloned()
                        .into_iter()
                        .collect();
                    return Ok(Some(chosen));
                }
                _ => {}
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, title: &str, items: &[PickedResource], state: &mut ListState) {
    let box_area = super::centered_box(frame.area(), 70, 22);
    frame.render_widget(Clear, box_area);
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if items.is_empty() {
        frame.render_widget(Paragraph::new("Nothing to pick"), parts[0]);
    } else {
        let rows: Vec<ListItem> = items
            .iter()
            .map(|r| {
                ListItem::new(format!(
                    "{}  ({})",
                    r.title.as_deref().unwrap_or("(untitled)"),
                    r.handle.as_deref().unwrap_or("-")
                ))
            })
            .collect();
        frame.render_stateful_widget(
            List::new(rows).highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            parts[0],
            state,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "enter: choose  esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
        parts[1],
    );
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
