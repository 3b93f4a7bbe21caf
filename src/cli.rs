//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history time travel and a session scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Two-player tic-tac-toe with move history and win tallying", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Path to session config
        #[arg(short, long, default_value = "tictactoe_timeline.toml")]
        config: PathBuf,
    },

    /// Apply intents headlessly and print the final snapshot as JSON
    Script {
        /// Path to session config
        #[arg(short, long, default_value = "tictactoe_timeline.toml")]
        config: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Intents in order, e.g. "play 4" "jump 0"
        #[arg(required = true)]
        intents: Vec<String>,
    },
}
