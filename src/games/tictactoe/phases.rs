//! Game lifecycle phases.
//!
//! `NotStarted → Active → Finished`, with `reset` re-arming a finished game.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finish {
    /// `player` completed `line`.
    Won {
        /// Winning mark.
        player: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// Full board, no winner.
    Draw,
}

impl Finish {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Finish::Won { player, .. } => Some(*player),
            Finish::Draw => None,
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No names entered yet; placements are ignored.
    #[default]
    NotStarted,
    /// Accepting placements.
    Active,
    /// Won or drawn; placements are ignored until reset.
    Finished(Finish),
}

impl Phase {
    /// True only while placements are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }
}
