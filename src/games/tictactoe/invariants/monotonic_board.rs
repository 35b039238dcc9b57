//! Monotonic board invariant: squares are written once.

use super::super::{Board, GameModel, Square};
use super::Invariant;

/// Invariant: the board is exactly the replay of the placement history,
/// with no square written twice.
pub struct MonotonicBoardInvariant;

impl Invariant<GameModel> for MonotonicBoardInvariant {
    fn holds(model: &GameModel) -> bool {
        let mut reconstructed = Board::new();

        for placement in model.history() {
            if !reconstructed.is_empty(placement.position) {
                return false;
            }
            reconstructed.set(placement.position, Square::Occupied(placement.mark));
        }

        reconstructed == *model.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
