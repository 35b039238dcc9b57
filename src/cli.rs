//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = tictactoe_duel::DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Name for X; with --player-o, skips the name-entry screen
        #[arg(long)]
        player_x: Option<String>,

        /// Name for O; with --player-x, skips the name-entry screen
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Apply moves without a UI and print each outcome
    Replay {
        /// Name for X
        #[arg(long, default_value = "")]
        player_x: String,

        /// Name for O
        #[arg(long, default_value = "")]
        player_o: String,

        /// Print one JSON object per move
        #[arg(long)]
        json: bool,

        /// Moves as `row,col` (0-based) or square numbers 1-9
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
