use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, BoardView, Phase};
use crate::model::card::Card;
use crate::model::status::StatusCategory;
use crate::ui::theme::{label_color, spinner, status_color, ACCENT, MUTED};
use crate::util::dates::{display_date, format_local};
use crate::util::seller::responsible_seller;

pub fn render(f: &mut Frame, area: Rect, app: &App, board_index: usize) {
    let Some(board) = app.boards.get(board_index) else {
        return;
    };
    let view = app.view(&board.id);

    let title = match view {
        Some(v) if v.phase == Phase::Loaded => {
            let updating = if v.settled { "" } else { " (uppdaterar...)" };
            format!(" {} · {} ordrar{updating} ", board.name, v.card_count())
        }
        _ => format!(" {} ", board.name),
    };

    let lines = match view {
        Some(v) => board_lines(v, app.spinner_frame),
        None => vec![Line::styled("Ingen data hämtad ännu", Style::default().fg(MUTED))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ratatui::style::Color::Cyan))
                .title(title),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.min(u16::MAX as usize) as u16, 0));

    f.render_widget(paragraph, area);
}

/// Lines for one board: every list with its cards, or the loading/error
/// state of the whole board.
pub fn board_lines(view: &BoardView, frame: usize) -> Vec<Line<'static>> {
    match &view.phase {
        Phase::Idle => vec![Line::styled(
            "Ingen data hämtad ännu",
            Style::default().fg(MUTED),
        )],
        Phase::Loading => vec![Line::from(format!("{} Laddar dashboard...", spinner(frame)))],
        Phase::Error(message) => vec![
            Line::styled(
                "Fel uppstod",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::raw(message.clone()),
            Line::raw(""),
            Line::styled("Tryck r för att försöka igen", Style::default().fg(MUTED)),
        ],
        Phase::Loaded => {
            let mut lines = Vec::new();
            for list in &view.lists {
                let category = StatusCategory::from_list_name(&list.name);
                let cards = view.cards_for(&list.id);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", category.icon()),
                        Style::default().fg(status_color(category)),
                    ),
                    Span::styled(
                        list.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} ordrar", cards.len()),
                        Style::default().fg(ACCENT),
                    ),
                ]));

                if view.is_list_loading(&list.id) {
                    lines.push(Line::styled(
                        format!("  {} laddar...", spinner(frame)),
                        Style::default().fg(MUTED),
                    ));
                } else if cards.is_empty() {
                    lines.push(Line::styled(
                        "  Inga ordrar i denna kategori",
                        Style::default().fg(MUTED),
                    ));
                } else {
                    lines.extend(cards.iter().map(card_line));
                }
                lines.push(Line::raw(""));
            }
            lines
        }
    }
}

fn card_line(card: &Card) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  • "),
        Span::raw(card.name.clone()),
        Span::styled(
            format!("  {}", format_local(display_date(card))),
            Style::default().fg(ratatui::style::Color::Gray),
        ),
    ];

    if let Some(seller) = responsible_seller(&card.desc) {
        spans.push(Span::styled(
            format!("  säljare: {seller}"),
            Style::default().fg(ratatui::style::Color::Cyan),
        ));
    }

    for label in card.labels.iter().filter(|l| !l.name.is_empty()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", label.name),
            Style::default().fg(label_color(label.color)),
        ));
    }

    Line::from(spans)
}
