pub mod board_panel;
pub mod footer;
pub mod overview;
pub mod placeholder;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Panel};

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    // Main content + footer
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(size);

    // Sidebar (fixed) + active panel
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(vertical[0]);

    sidebar::render(f, horizontal[0], app);

    match app.active {
        Panel::Overview => overview::render(f, horizontal[1], app),
        Panel::Board(i) => board_panel::render(f, horizontal[1], app, i),
        Panel::Placeholder => placeholder::render(f, horizontal[1]),
    }

    footer::render(f, vertical[1], app);
}
