//! Multitoe - terminal multi-player tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use multitoe::{AppConfig, ScoreBackend, SqliteStore, run_tui, score_report};
use multitoe_core::{Game, KeyValueStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Play {
            players,
            db_path,
            ephemeral,
        } => run_play(config, players, db_path, ephemeral),
        Command::Scores { db_path, reset } => run_scores(config, db_path, reset),
    }
}

/// Run the terminal game.
fn run_play(
    config: AppConfig,
    players: Option<u8>,
    db_path: Option<String>,
    ephemeral: bool,
) -> Result<()> {
    let mut config = config;
    if let Some(players) = players {
        config = config.with_players(players);
    }
    if let Some(db_path) = db_path {
        config = config.with_db_path(db_path);
    }

    initialize_file_tracing(config.log_file())?;
    info!(?config, ephemeral, "Starting multitoe");

    let player_count = config.player_count()?;
    let store = ScoreBackend::open(config.db_path(), ephemeral)?;
    let game = Game::load(store, config.scores_key().clone(), player_count);

    run_tui(game)
}

/// Print or clear the persisted score table.
fn run_scores(config: AppConfig, db_path: Option<String>, reset: bool) -> Result<()> {
    initialize_stderr_tracing();

    let db_path = db_path.unwrap_or_else(|| config.db_path().clone());
    let mut store = SqliteStore::open(db_path)?;
    let key = config.scores_key();

    if reset {
        store.remove(key)?;
        println!("Scores reset.");
        return Ok(());
    }

    for line in score_report(&store, key)? {
        println!("{}", line);
    }
    Ok(())
}

/// Log to a file so the TUI owns the terminal.
fn initialize_file_tracing(path: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file '{}'", path))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
