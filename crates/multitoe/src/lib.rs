//! Multitoe - multi-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Core**: board, win scanner and turn state machine (`multitoe_core`)
//! - **Db**: SQLite key-value table the score table is persisted in
//! - **Config**: TOML settings with command-line overrides
//! - **Tui**: ratatui front end driving the state machine from key presses
//!
//! # Example
//!
//! ```no_run
//! use multitoe::{AppConfig, ScoreBackend};
//! use multitoe_core::Game;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load("multitoe.toml")?;
//! let store = ScoreBackend::open(config.db_path(), false)?;
//! let game = Game::load(store, config.scores_key().clone(), config.player_count()?);
//! multitoe::run_tui(game)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod config;
mod db;
mod report;
mod tui;

pub use backend::ScoreBackend;
pub use config::{AppConfig, ConfigError};
pub use db::{DbError, KvEntry, NewKvEntry, SqliteStore};
pub use report::{NO_SCORES, score_report};
pub use tui::run_tui;
