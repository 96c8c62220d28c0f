use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Panel};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![hint("↑↓", "meny"), hint("enter", "öppna")];

    match app.active {
        Panel::Overview => spans.push(hint("r", "uppdatera")),
        Panel::Board(_) => {
            spans.push(hint("r", "uppdatera/försök igen"));
            spans.push(hint("j/k", "scrolla"));
        }
        Panel::Placeholder => {}
    }
    spans.push(hint("q", "avsluta"));

    // Flash message
    if let Some((msg, _)) = &app.flash_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg,
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}

fn hint(key: &str, desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {key}:{desc} "),
        Style::default().fg(ratatui::style::Color::DarkGray),
    )
}
