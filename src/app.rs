use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::debug;

use crate::aggregate::{group_by_list, sort_cards};
use crate::config::BoardConfig;
use crate::event::KeyAction;
use crate::fetch;
use crate::model::card::Card;
use crate::model::list::BoardList;
use crate::model::status::StatusCategory;
use crate::providers::BoardSource;
use crate::ui::board_panel::board_lines;

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    ListsLoaded {
        board_id: String,
        cycle: u64,
        lists: Vec<BoardList>,
    },
    ListsFailed {
        board_id: String,
        cycle: u64,
        message: String,
    },
    CardsLoaded {
        board_id: String,
        cycle: u64,
        list_id: String,
        cards: Vec<Card>,
    },
    CycleSettled {
        board_id: String,
        cycle: u64,
    },
    Quit,
}

/// Entries of the sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Board(usize),
    Placeholder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardsState {
    Loading,
    Loaded(Vec<Card>),
    Empty,
}

/// Everything known about one board from its latest fetch cycle.
#[derive(Debug, Default)]
pub struct BoardView {
    pub cycle: u64,
    pub phase: Phase,
    pub lists: Vec<BoardList>,
    pub cards: HashMap<String, CardsState>,
    /// All card fetches of the current cycle have resolved.
    pub settled: bool,
}

impl BoardView {
    pub fn cards_for(&self, list_id: &str) -> &[Card] {
        match self.cards.get(list_id) {
            Some(CardsState::Loaded(cards)) => cards,
            _ => &[],
        }
    }

    pub fn is_list_loading(&self, list_id: &str) -> bool {
        matches!(self.cards.get(list_id), Some(CardsState::Loading))
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| self.cards_for(&l.id).len()).sum()
    }

    pub fn category_counts(&self) -> Vec<(StatusCategory, usize)> {
        StatusCategory::ALL
            .iter()
            .map(|category| {
                let count = self
                    .lists
                    .iter()
                    .filter(|l| StatusCategory::from_list_name(&l.name) == *category)
                    .map(|l| self.cards_for(&l.id).len())
                    .sum();
                (*category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

pub struct App {
    pub boards: Vec<BoardConfig>,
    pub views: HashMap<String, BoardView>,
    pub menu_cursor: usize,
    pub active: Panel,
    pub scroll: usize,
    pub spinner_frame: usize,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub action_tx: mpsc::UnboundedSender<Action>,
    source: Arc<dyn BoardSource>,
}

impl App {
    pub fn new(
        boards: Vec<BoardConfig>,
        source: Arc<dyn BoardSource>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            boards,
            views: HashMap::new(),
            menu_cursor: 0,
            active: Panel::Overview,
            scroll: 0,
            spinner_frame: 0,
            flash_message: None,
            should_quit: false,
            action_tx,
            source,
        }
    }

    pub fn menu(&self) -> Vec<Panel> {
        let mut menu = vec![Panel::Overview];
        menu.extend((0..self.boards.len()).map(Panel::Board));
        menu.push(Panel::Placeholder);
        menu
    }

    pub fn panel_title(&self, panel: Panel) -> &str {
        match panel {
            Panel::Overview => "Översikt",
            Panel::Board(i) => self.boards.get(i).map(|b| b.name.as_str()).unwrap_or("?"),
            Panel::Placeholder => "Kommande",
        }
    }

    pub fn view(&self, board_id: &str) -> Option<&BoardView> {
        self.views.get(board_id)
    }

    pub fn total_orders(&self) -> usize {
        self.views.values().map(BoardView::card_count).sum()
    }

    pub fn update(&mut self, action: Action) {
        // Clear flash message after 3 seconds
        if let Some((_, t)) = &self.flash_message {
            if t.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::ListsLoaded {
                board_id,
                cycle,
                lists,
            } => {
                if let Some(view) = self.current_view(&board_id, cycle) {
                    view.cards = lists
                        .iter()
                        .map(|l| (l.id.clone(), CardsState::Loading))
                        .collect();
                    view.lists = lists;
                    view.phase = Phase::Loaded;
                }
            }
            Action::ListsFailed {
                board_id,
                cycle,
                message,
            } => {
                if let Some(view) = self.current_view(&board_id, cycle) {
                    view.phase = Phase::Error(message.clone());
                    view.settled = true;
                    let name = self
                        .boards
                        .iter()
                        .find(|b| b.id == board_id)
                        .map(|b| b.name.clone())
                        .unwrap_or(board_id);
                    self.flash_message = Some((format!("{name}: {message}"), Instant::now()));
                }
            }
            Action::CardsLoaded {
                board_id,
                cycle,
                list_id,
                cards,
            } => {
                if let Some(view) = self.current_view(&board_id, cycle) {
                    // A card belongs to exactly one list per cycle: the one it says it is in.
                    let mut cards = group_by_list(cards).remove(&list_id).unwrap_or_default();
                    let list_name = view
                        .lists
                        .iter()
                        .find(|l| l.id == list_id)
                        .map(|l| l.name.as_str())
                        .unwrap_or_default();
                    sort_cards(list_name, &mut cards);
                    let state = if cards.is_empty() {
                        CardsState::Empty
                    } else {
                        CardsState::Loaded(cards)
                    };
                    view.cards.insert(list_id, state);
                }
            }
            Action::CycleSettled { board_id, cycle } => {
                if let Some(view) = self.current_view(&board_id, cycle) {
                    view.settled = true;
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => {
                if self.menu_cursor > 0 {
                    self.menu_cursor -= 1;
                }
            }
            KeyAction::Down => {
                if self.menu_cursor < self.menu().len() - 1 {
                    self.menu_cursor += 1;
                }
            }
            KeyAction::Select => {
                if let Some(panel) = self.menu().get(self.menu_cursor).copied() {
                    self.activate(panel);
                }
            }
            KeyAction::Refresh => self.refresh(),
            KeyAction::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                if self.scroll < self.max_scroll() {
                    self.scroll += 1;
                }
            }
        }
    }

    /// Last scroll offset that still shows a line of the active panel.
    fn max_scroll(&self) -> usize {
        match self.active {
            Panel::Board(i) => self
                .boards
                .get(i)
                .and_then(|b| self.view(&b.id))
                .map(|v| board_lines(v, self.spinner_frame).len().saturating_sub(1))
                .unwrap_or(0),
            Panel::Overview | Panel::Placeholder => 0,
        }
    }

    /// Switch the main area to `panel` and start a fresh fetch for it.
    pub fn activate(&mut self, panel: Panel) {
        self.active = panel;
        self.scroll = 0;
        self.refresh();
    }

    /// Re-fetch whatever the active panel shows. Also serves as retry from
    /// the error state.
    pub fn refresh(&mut self) {
        let board_ids: Vec<String> = match self.active {
            Panel::Overview => self.boards.iter().map(|b| b.id.clone()).collect(),
            Panel::Board(i) => self.boards.get(i).map(|b| b.id.clone()).into_iter().collect(),
            Panel::Placeholder => Vec::new(),
        };
        for board_id in board_ids {
            self.start_cycle(board_id);
        }
    }

    fn start_cycle(&mut self, board_id: String) {
        let view = self.views.entry(board_id.clone()).or_default();
        view.cycle += 1;
        view.phase = Phase::Loading;
        view.lists.clear();
        view.cards.clear();
        view.settled = false;

        tokio::spawn(fetch::run_cycle(
            self.source.clone(),
            board_id,
            view.cycle,
            self.action_tx.clone(),
        ));
    }

    /// The board's view, unless `cycle` has been superseded by a newer fetch.
    fn current_view(&mut self, board_id: &str, cycle: u64) -> Option<&mut BoardView> {
        match self.views.get_mut(board_id) {
            Some(view) if view.cycle == cycle => Some(view),
            _ => {
                debug!(board = %board_id, cycle, "discarding result from stale fetch cycle");
                None
            }
        }
    }
}
