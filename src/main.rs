//! Tic Tac Toe - terminal game and replay tool.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use std::sync::Arc;
use tictactoe_duel::{AppConfig, Controller, parse_moves, run_replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        None => run_play(config, None, None),
        Some(Command::Play { player_x, player_o }) => run_play(config, player_x, player_o),
        Some(Command::Replay {
            player_x,
            player_o,
            json,
            moves,
        }) => run_replay_command(&config, &player_x, &player_o, json, &moves),
    }
}

/// Run the interactive terminal game
fn run_play(config: AppConfig, player_x: Option<String>, player_o: Option<String>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let controller = match (player_x, player_o) {
        (Some(x), Some(o)) => {
            info!("Both names given, skipping name entry");
            Controller::with_players(&x, &o)
        }
        (x, o) => Controller::new(&config.with_names(x, o)),
    };

    tui::run_tui(controller)
}

/// Run a non-interactive replay, reporting to stdout
fn run_replay_command(
    config: &AppConfig,
    player_x: &str,
    player_o: &str,
    json: bool,
    moves: &[String],
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let moves = parse_moves(moves)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_replay(player_x, player_o, &moves, json, &mut out)?;
    out.flush()?;
    Ok(())
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
