pub mod trello;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::card::Card;
use crate::model::list::BoardList;

pub const LISTS_CONTEXT: &str = "Kunde inte hämta listor";
pub const CARDS_CONTEXT: &str = "Kunde inte hämta kort";

/// Why a request to the board API failed. The message is shown to the user
/// as-is, prefixed with what was being fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{context}: HTTP {status}: {reason}")]
    Status {
        context: &'static str,
        status: u16,
        reason: String,
    },
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to a kanban board's lists and cards.
#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, FetchError>;
    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<Card>, FetchError>;
}

#[cfg(test)]
pub mod tests;
