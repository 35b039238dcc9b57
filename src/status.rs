//! Status line text for a model.

use crate::games::tictactoe::{Finish, GameModel, Phase};

/// Status shown before any game has started.
pub const NOT_STARTED_MESSAGE: &str = "Enter player names to begin";

/// Status shown after a draw.
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// Describes the model's state the way the status line shows it.
pub fn status_message(model: &GameModel) -> String {
    match model.phase() {
        Phase::NotStarted => NOT_STARTED_MESSAGE.to_string(),
        Phase::Active => format!("{}'s turn", model.current_player_name()),
        Phase::Finished(Finish::Won { player, .. }) => format!("{} wins!", model.name_of(player)),
        Phase::Finished(Finish::Draw) => DRAW_MESSAGE.to_string(),
    }
}
