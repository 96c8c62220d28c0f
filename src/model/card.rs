use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::label::Label;

/// A single order card as returned by `GET /1/lists/{id}/cards`.
///
/// Every field falls back to its default when the API leaves it out, so a
/// card with an unexpected shape still renders (with blanks) instead of
/// failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub id_list: String,
}
