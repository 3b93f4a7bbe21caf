//! Tic-tac-toe timeline - CLI entry point
//!
//! Runs the terminal game or applies scripted intents headlessly.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_timeline::{
    Clock, GameController, GameSnapshot, Intent, IntentOutcome, PlayOutcome, SessionConfig,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config } => run_tui(&config),
        Command::Script {
            config,
            pretty,
            intents,
        } => run_script(&config, pretty, &intents),
    }
}

/// Builds the env filter, preferring `RUST_LOG` over the configured default.
fn env_filter(config: &SessionConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so the screen stays clean
fn run_tui(config_path: &Path) -> Result<()> {
    let config = SessionConfig::load_or_default(config_path)?;

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tic-tac-toe TUI");
    tui::run(GameController::with_clock(config.clock()))
}

/// Apply textual intents in order and print the resulting snapshot
fn run_script(config_path: &Path, pretty: bool, intents: &[String]) -> Result<()> {
    let config = SessionConfig::load_or_default(config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    let snapshot = apply_intents(GameController::with_clock(config.clock()), intents)?;
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", json);

    Ok(())
}

/// Feeds parsed intents to `game`, logging the ones it rejects
#[instrument(skip(game, intents), fields(count = intents.len()))]
fn apply_intents<C: Clock>(
    mut game: GameController<C>,
    intents: &[String],
) -> Result<GameSnapshot> {
    for raw in intents {
        let intent: Intent = raw
            .parse()
            .with_context(|| format!("Failed to parse intent '{}'", raw))?;

        match game.apply(intent) {
            Ok(IntentOutcome::Played(PlayOutcome::Placed { .. })) => {}
            Ok(IntentOutcome::Played(rejected)) => {
                warn!(%intent, ?rejected, "Intent ignored");
            }
            Ok(IntentOutcome::Jumped {
                recorded: Some(event),
                ..
            }) => {
                info!(%event, "Win recorded");
            }
            Ok(IntentOutcome::Jumped { .. }) => {}
            Err(e) => warn!(%intent, error = %e, "Intent rejected"),
        }
    }

    Ok(game.snapshot())
}
