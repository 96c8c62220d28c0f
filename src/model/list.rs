use serde::{Deserialize, Serialize};

/// One column of a Trello board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}
