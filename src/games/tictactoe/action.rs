//! Placements and their outcomes.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark written into a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Result of a placement request.
///
/// A stray request (occupied square, finished or unstarted game, coordinates
/// off the board) is `Ignored` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Request rejected; nothing changed.
    Ignored,
    /// The placing mark completed a line.
    Win {
        /// Winning mark.
        player: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board filled without a winner.
    Draw,
    /// Play continues.
    Continued {
        /// Mark to move next.
        next_player: Mark,
    },
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win { .. } | Outcome::Draw)
    }
}
