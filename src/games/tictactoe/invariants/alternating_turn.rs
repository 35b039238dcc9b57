//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameModel, Mark, Phase};
use super::Invariant;

/// Invariant: placements alternate starting with X, and the mark to move
/// agrees with the history.
///
/// While active the next mark follows the last one. Once finished the
/// current mark stays on the player who ended the game.
pub struct AlternatingTurnInvariant;

impl Invariant<GameModel> for AlternatingTurnInvariant {
    fn holds(model: &GameModel) -> bool {
        let history = model.history();

        if let Some(first) = history.first() {
            if first.mark != Mark::X {
                return false;
            }
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let x = model.board().count(Mark::X);
        let o = model.board().count(Mark::O);
        if x != o && x != o + 1 {
            return false;
        }

        match (model.phase(), history.last()) {
            (Phase::Active, Some(last)) => model.current_player() == last.mark.opponent(),
            (Phase::Finished(_), Some(last)) => model.current_player() == last.mark,
            // Nothing can be placed before the game starts.
            (Phase::NotStarted, Some(_)) => false,
            (_, None) => model.current_player() == Mark::X,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
