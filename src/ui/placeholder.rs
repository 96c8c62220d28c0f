use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::MUTED;

pub fn render(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Kommer snart")
        .alignment(Alignment::Center)
        .style(Style::default().fg(MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ratatui::style::Color::Cyan))
                .title(" Kommande "),
        );
    f.render_widget(paragraph, area);
}
