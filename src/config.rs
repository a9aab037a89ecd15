//! Client configuration
//!
//! Loaded from `config.toml` under the platform config directory, with the
//! `DAILY_API_URL` environment variable taking precedence. Missing file or
//! fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const APP_DIR: &str = "daily-challenge";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Default number of leaderboard rows to fetch.
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,
    /// Default page size for challenge history.
    #[serde(default = "default_history_page_size")]
    pub history_page_size: u32,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_leaderboard_limit() -> usize {
    50
}

fn default_history_page_size() -> u32 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            leaderboard_limit: default_leaderboard_limit(),
            history_page_size: default_history_page_size(),
        }
    }
}

impl ClientConfig {
    /// Platform config directory for this app (`~/.config/daily-challenge` on
    /// Linux), falling back to the working directory when unavailable.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Load configuration: file, then environment overrides.
    pub fn load() -> Self {
        let path = Self::config_dir().join("config.toml");
        let mut config = match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|err| {
                debug!("ignoring malformed config at {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var("DAILY_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        config.api_url = config.api_url.trim_end_matches('/').to_string();
        config
    }
}
