//! Command-line interface for multitoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Multitoe - multi-player tic-tac-toe with persistent scores
#[derive(Parser, Debug)]
#[command(name = "multitoe")]
#[command(about = "Multi-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "multitoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Number of players (2-5); 4 or more plays on a 6x6 board
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=5))]
        players: Option<u8>,

        /// Database file holding the score table
        #[arg(long)]
        db_path: Option<String>,

        /// Keep scores in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Show or clear the persisted scores
    Scores {
        /// Database file holding the score table
        #[arg(long)]
        db_path: Option<String>,

        /// Delete the persisted score table
        #[arg(long)]
        reset: bool,
    },
}
