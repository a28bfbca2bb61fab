use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::ResourceKind;
use crate::picker::PickKind;
use crate::pipeline::RunPhase;
use crate::selection::SelectionView;

use super::{App, Focus};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "App to Test Store Resources",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(app.shop_label.as_str(), Style::default().fg(Color::Gray)),
        ])),
        chunks[0],
    );

    draw_customers(frame, app, chunks[1]);
    draw_resource(frame, app, PickKind::Product, Focus::Product, chunks[2]);
    draw_resource(frame, app, PickKind::Collection, Focus::Collection, chunks[3]);
    draw_provision(frame, app, chunks[4]);

    let log_lines: Vec<Line> = app
        .log
        .iter()
        .rev()
        .take(chunks[5].height.saturating_sub(2) as usize)
        .rev()
        .map(|s| Line::from(s.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(log_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Log")),
        chunks[5],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "tab/↑↓: move  enter: select  a: add  r: run provisioning  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[6],
    );

    if app.customer_modal.is_visible() {
        super::customer_modal::draw(frame, app);
    }
}

fn card(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_string())
}

fn draw_customers(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let count = match app.selection.current_selection(ResourceKind::Customer) {
        SelectionView::Customers(set) => set.len(),
        SelectionView::Single(_) => 0,
    };
    let names: Vec<String> = app
        .selection
        .selected_customers(app.candidates.get())
        .into_iter()
        .map(|c| c.display_name.clone())
        .collect();
    let lines = vec![
        Line::from("[ Select Customer ]"),
        Line::from(Span::styled(
            if count == 0 {
                "none selected".to_string()
            } else {
                format!("{} selected: {}", count, names.join(", "))
            },
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(card("Customer", app.focus == Focus::Customers)),
        area,
    );
}

fn draw_resource(frame: &mut ratatui::Frame, app: &App, kind: PickKind, focus: Focus, area: Rect) {
    let label = match kind {
        PickKind::Product => "Product",
        PickKind::Collection => "Collection",
    };
    let form = app.selection.form(kind);
    let lines = if form.is_selected() {
        vec![
            Line::from(vec![
                Span::raw(if form.image_url.is_some() { "▣ " } else { "□ " }),
                Span::styled(
                    form.title.clone().unwrap_or_default(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", form.handle.clone().unwrap_or_default()),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(Span::styled(
                format!("[ Change {} ]", label),
                Style::default().fg(Color::Cyan),
            )),
        ]
    } else {
        vec![Line::from(format!("[ Select {} ]", label))]
    };
    frame.render_widget(
        Paragraph::new(lines).block(card(label, app.focus == focus)),
        area,
    );
}

fn draw_provision(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let phase = app.pipeline.as_ref().map(|p| p.phase());
    let action = if phase.is_some_and(RunPhase::is_terminal) {
        "[ Run provisioning again ]  "
    } else {
        "[ Run provisioning ]  "
    };
    let phase = phase
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let mut lines = vec![Line::from(vec![
        Span::raw(action),
        Span::styled(format!("phase: {}", phase), Style::default().fg(Color::Gray)),
    ])];
    lines.extend(app.last_result.iter().map(|s| Line::from(s.as_str())));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card("Provisioning", app.focus == Focus::Provision)),
        area,
    );
}
