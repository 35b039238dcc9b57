//! Tic-tac-toe rule engine: board, rules, and game model.

mod action;
mod model;
mod phases;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Outcome, Placement};
pub use model::{DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, GameModel};
pub use phases::{Finish, Phase};
pub use position::{MoveParseError, Position};
pub use types::{Board, Mark, Square};
