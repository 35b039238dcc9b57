//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Games**: the rule engine ([`GameModel`]) with no knowledge of rendering
//! - **TUI**: a terminal front end (name entry, board, status line)
//! - **Replay**: non-interactive play from a list of moves
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameModel, Mark, Outcome};
//!
//! let mut model = GameModel::new();
//! model.start_game("Ann", "");
//! assert_eq!(model.player_o_name(), "Player 2");
//! assert_eq!(
//!     model.place_mark(1, 1),
//!     Outcome::Continued { next_player: Mark::O }
//! );
//! // Occupied squares are ignored, not errors.
//! assert_eq!(model.place_mark(1, 1), Outcome::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod replay;
mod status;

pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Replay
pub use replay::{parse_moves, run_replay};

// Crate-level exports - Terminal UI
pub use tui::{Controller, run_tui};

// Crate-level exports - Status text
pub use status::{DRAW_MESSAGE, NOT_STARTED_MESSAGE, status_message};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, Finish, GameModel, Mark,
    MoveParseError, Outcome, Phase, Placement, Position, Square,
};
