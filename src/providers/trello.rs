use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{BoardSource, FetchError, CARDS_CONTEXT, LISTS_CONTEXT};
use crate::config::TrelloConfig;
use crate::model::card::Card;
use crate::model::list::BoardList;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

const CARD_FIELDS: &str = "id,name,url,dateLastActivity,desc,labels,idList";

pub struct TrelloClient {
    api_key: String,
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl TrelloClient {
    pub fn new(api_key: String, token: String, base_url: String) -> Self {
        Self {
            api_key,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(cfg: &TrelloConfig) -> Self {
        Self::new(
            cfg.api_key.clone(),
            cfg.token.clone(),
            cfg.base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )
    }

    fn auth_params(&self) -> [(&str, &str); 2] {
        [("key", &self.api_key), ("token", &self.token)]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &'static str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/1/{path}", self.base_url);
        debug!(%url, "GET");

        let transport = |source: reqwest::Error| FetchError::Transport { context, source };
        let response = self
            .client
            .get(&url)
            .query(&self.auth_params())
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                context,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { context, source })
    }
}

#[async_trait]
impl BoardSource for TrelloClient {
    async fn fetch_lists(&self, board_id: &str) -> Result<Vec<BoardList>, FetchError> {
        let path = format!("boards/{}/lists", urlencoding::encode(board_id));
        self.get_json(&path, &[("fields", "id,name")], LISTS_CONTEXT)
            .await
    }

    async fn fetch_cards(&self, list_id: &str) -> Result<Vec<Card>, FetchError> {
        let path = format!("lists/{}/cards", urlencoding::encode(list_id));
        let mut cards: Vec<Card> = self
            .get_json(
                &path,
                &[
                    ("members", "true"),
                    ("labels", "true"),
                    ("fields", CARD_FIELDS),
                ],
                CARDS_CONTEXT,
            )
            .await?;
        for card in cards.iter_mut().filter(|c| c.id_list.is_empty()) {
            card.id_list = list_id.to_string();
        }
        Ok(cards)
    }
}
