//! Application configuration.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use multitoe_core::PlayerCount;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Settings read from `multitoe.toml`, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Number of players at startup (2-5).
    #[serde(default = "default_players")]
    players: u8,

    /// SQLite database file holding the score table.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Key the score table is stored under.
    #[serde(default = "default_scores_key")]
    scores_key: String,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: String,
}

#[instrument]
fn default_players() -> u8 {
    2
}

#[instrument]
fn default_db_path() -> String {
    "multitoe.db".to_string()
}

#[instrument]
fn default_scores_key() -> String {
    "ticTacToeScores".to_string()
}

#[instrument]
fn default_log_file() -> String {
    "multitoe.log".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            db_path: default_db_path(),
            scores_key: default_scores_key(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(players = config.players, db_path = %config.db_path, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is unreadable or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validated player count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `players` is outside 2-5.
    #[instrument(skip(self), fields(players = self.players))]
    pub fn player_count(&self) -> Result<PlayerCount, ConfigError> {
        PlayerCount::new(self.players).map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scores_key(), "ticTacToeScores");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml("players = 4\ndb_path = \"scores.db\"\n").unwrap();
        assert_eq!(*config.players(), 4);
        assert_eq!(config.db_path(), "scores.db");
        assert_eq!(config.log_file(), "multitoe.log");
        assert_eq!(config.player_count().unwrap().get(), 4);
    }

    #[test]
    fn test_invalid_player_count() {
        let config = AppConfig::default().with_players(9);
        assert!(config.player_count().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(AppConfig::from_toml("players = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("/nonexistent/multitoe.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
