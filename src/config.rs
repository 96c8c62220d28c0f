use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub trello: Option<TrelloConfig>,
    #[serde(default)]
    pub boards: Vec<BoardConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    pub id: String,
    pub name: String,
}

const DEFAULT_BOARD_NAME: &str = "Orderstatus";

pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".orderstatus")
}

fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

pub fn log_path() -> PathBuf {
    data_dir().join("orderstatus.log")
}

/// Load `~/.orderstatus/config.toml` and apply environment overrides.
pub fn load_config() -> Result<AppConfig> {
    let config = load_config_from(&config_path())?;
    Ok(apply_env(config, |name| std::env::var(name).ok()))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

/// `TRELLO_API_KEY`, `TRELLO_TOKEN` and `TRELLO_BASE_URL` replace the file
/// values; `TRELLO_BOARD_ID` adds a board unless it is already configured.
pub fn apply_env(mut config: AppConfig, var: impl Fn(&str) -> Option<String>) -> AppConfig {
    let key = var("TRELLO_API_KEY");
    let token = var("TRELLO_TOKEN");
    let base_url = var("TRELLO_BASE_URL");

    match config.trello.as_mut() {
        Some(trello) => {
            if let Some(key) = key {
                trello.api_key = key;
            }
            if let Some(token) = token {
                trello.token = token;
            }
            if base_url.is_some() {
                trello.base_url = base_url;
            }
        }
        None => {
            if let (Some(api_key), Some(token)) = (key, token) {
                config.trello = Some(TrelloConfig {
                    api_key,
                    token,
                    base_url,
                });
            }
        }
    }

    if let Some(board_id) = var("TRELLO_BOARD_ID").filter(|id| !id.is_empty()) {
        if !config.boards.iter().any(|b| b.id == board_id) {
            config.boards.push(BoardConfig {
                id: board_id,
                name: DEFAULT_BOARD_NAME.to_string(),
            });
        }
    }

    config
}

impl AppConfig {
    pub fn require_trello(&self) -> Result<&TrelloConfig> {
        match &self.trello {
            Some(cfg) if !cfg.api_key.is_empty() && !cfg.token.is_empty() => Ok(cfg),
            _ => bail!(
                "No Trello credentials configured. Add [trello] api_key and token to {} or set TRELLO_API_KEY and TRELLO_TOKEN",
                config_path().display()
            ),
        }
    }

    /// Position of a board by id or (case-insensitive) name.
    pub fn board_index(&self, needle: &str) -> Option<usize> {
        self.boards
            .iter()
            .position(|b| b.id == needle || b.name.eq_ignore_ascii_case(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.trello.is_none());
        assert!(config.boards.is_empty());
    }

    #[test]
    fn parses_trello_and_boards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[trello]
api_key = "abc"
token = "def"

[[boards]]
id = "b1"
name = "Ordrar"

[[boards]]
id = "b2"
name = "Service"
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        let trello = config.require_trello().unwrap();
        assert_eq!(trello.api_key, "abc");
        assert_eq!(trello.base_url, None);
        assert_eq!(config.boards.len(), 2);
        assert_eq!(config.board_index("service"), Some(1));
        assert_eq!(config.board_index("b1"), Some(0));
        assert_eq!(config.board_index("lager"), None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[trello\napi_key=").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn env_supplies_credentials_and_board() {
        let config = apply_env(
            AppConfig::default(),
            env(&[
                ("TRELLO_API_KEY", "k"),
                ("TRELLO_TOKEN", "t"),
                ("TRELLO_BOARD_ID", "b9"),
            ]),
        );
        let trello = config.require_trello().unwrap();
        assert_eq!(trello.api_key, "k");
        assert_eq!(trello.token, "t");
        assert_eq!(
            config.boards,
            vec![BoardConfig {
                id: "b9".into(),
                name: "Orderstatus".into()
            }]
        );
    }

    #[test]
    fn env_overrides_file_values_without_duplicating_boards() {
        let config = AppConfig {
            trello: Some(TrelloConfig {
                api_key: "file-key".into(),
                token: "file-token".into(),
                base_url: None,
            }),
            boards: vec![BoardConfig {
                id: "b1".into(),
                name: "Ordrar".into(),
            }],
        };
        let config = apply_env(
            config,
            env(&[
                ("TRELLO_TOKEN", "env-token"),
                ("TRELLO_BASE_URL", "http://localhost:9"),
                ("TRELLO_BOARD_ID", "b1"),
            ]),
        );
        let trello = config.require_trello().unwrap();
        assert_eq!(trello.api_key, "file-key");
        assert_eq!(trello.token, "env-token");
        assert_eq!(trello.base_url.as_deref(), Some("http://localhost:9"));
        assert_eq!(config.boards.len(), 1);
    }

    #[test]
    fn only_key_without_token_is_not_enough() {
        let config = apply_env(AppConfig::default(), env(&[("TRELLO_API_KEY", "k")]));
        assert!(config.require_trello().is_err());
    }
}
