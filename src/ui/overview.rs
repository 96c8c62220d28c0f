use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Phase};
use crate::ui::theme::{spinner, status_color, ACCENT, MUTED};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "Orderstatus Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} aktiva ordrar", app.total_orders()),
                Style::default().fg(ACCENT),
            ),
        ]),
        Line::raw(""),
    ];

    if app.boards.is_empty() {
        lines.push(Line::styled(
            "Inga tavlor konfigurerade",
            Style::default().fg(MUTED),
        ));
    }

    for board in &app.boards {
        let view = app.view(&board.id);
        let status = match view.map(|v| &v.phase) {
            None | Some(Phase::Idle) => Span::styled("ej hämtad", Style::default().fg(MUTED)),
            Some(Phase::Loading) => Span::raw(format!("{} laddar", spinner(app.spinner_frame))),
            Some(Phase::Error(msg)) => {
                Span::styled(format!("fel: {msg}"), Style::default().fg(ACCENT))
            }
            Some(Phase::Loaded) => Span::styled(
                format!("{} ordrar", view.map(|v| v.card_count()).unwrap_or(0)),
                Style::default().fg(ACCENT),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", board.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            status,
        ]));

        if let Some(v) = view.filter(|v| v.phase == Phase::Loaded) {
            let mut spans = vec![Span::raw("  ")];
            for (category, count) in v.category_counts() {
                spans.push(Span::styled(
                    format!("{} {} {count}   ", category.icon(), category),
                    Style::default().fg(status_color(category)),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ratatui::style::Color::Cyan))
            .title(" Översikt "),
    );

    f.render_widget(paragraph, area);
}
