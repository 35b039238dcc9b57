//! The tic-tac-toe rule engine.
//!
//! [`GameModel`] owns all game state and is driven through three operations:
//! [`start_game`](GameModel::start_game), [`place_mark`](GameModel::place_mark)
//! and [`reset`](GameModel::reset). It has no knowledge of how it is rendered.

use super::action::{Outcome, Placement};
use super::invariants::{InvariantSet, ModelInvariants};
use super::phases::{Finish, Phase};
use super::rules::{is_full, winning_line};
use super::{Board, Mark, Position, Square};
use tracing::{debug, error, info, instrument, warn};

/// Name used for X when none is entered.
pub const DEFAULT_PLAYER_X_NAME: &str = "Player 1";

/// Name used for O when none is entered.
pub const DEFAULT_PLAYER_O_NAME: &str = "Player 2";

/// Complete game state for one two-player session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) phase: Phase,
    pub(crate) player_x_name: String,
    pub(crate) player_o_name: String,
    pub(crate) history: Vec<Placement>,
}

impl GameModel {
    /// Creates a model with an empty board that ignores placements until
    /// [`start_game`](Self::start_game) or [`reset`](Self::reset).
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            phase: Phase::NotStarted,
            player_x_name: DEFAULT_PLAYER_X_NAME.to_string(),
            player_o_name: DEFAULT_PLAYER_O_NAME.to_string(),
            history: Vec::new(),
        }
    }

    /// Sets the player names and starts a fresh game with X to move.
    ///
    /// Names are trimmed; blank names fall back to "Player 1" / "Player 2".
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name_x: &str, name_o: &str) {
        self.player_x_name = normalize_name(name_x, DEFAULT_PLAYER_X_NAME);
        self.player_o_name = normalize_name(name_o, DEFAULT_PLAYER_O_NAME);
        info!(
            player_x = %self.player_x_name,
            player_o = %self.player_o_name,
            "Starting game"
        );
        self.arm();
    }

    /// Clears the board and re-arms play with X to move. Names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous_phase = ?self.phase, "Resetting game");
        self.arm();
    }

    /// Places the current player's mark at zero-based `(row, col)`.
    ///
    /// Coordinates off the board are ignored like any other stray request.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Outcome {
        match Position::from_coords(row, col) {
            Some(pos) => self.place(pos),
            None => {
                warn!(row, col, "Ignoring placement off the board");
                Outcome::Ignored
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns [`Outcome::Ignored`] without touching any state when the game
    /// is not active or the square is taken. Otherwise the win check runs
    /// before the draw check, and only a continuing game changes turns.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place(&mut self, pos: Position) -> Outcome {
        if !self.phase.is_active() {
            debug!(phase = ?self.phase, "Ignoring placement while inactive");
            return Outcome::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring placement on occupied square");
            return Outcome::Ignored;
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Placement::new(player, pos));

        let outcome = if let Some(line) = winning_line(&self.board, player) {
            self.phase = Phase::Finished(Finish::Won { player, line });
            info!(?player, ?line, "Game won");
            Outcome::Win { player, line }
        } else if is_full(&self.board) {
            self.phase = Phase::Finished(Finish::Draw);
            info!("Game drawn");
            Outcome::Draw
        } else {
            self.current_player = player.opponent();
            Outcome::Continued {
                next_player: self.current_player,
            }
        };

        self.check_invariants();
        outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move, or the mark that ended a finished game.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only while placements are accepted.
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns X's display name.
    pub fn player_x_name(&self) -> &str {
        &self.player_x_name
    }

    /// Returns O's display name.
    pub fn player_o_name(&self) -> &str {
        &self.player_o_name
    }

    /// Returns the display name for `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x_name,
            Mark::O => &self.player_o_name,
        }
    }

    /// Returns the display name of [`current_player`](Self::current_player).
    pub fn current_player_name(&self) -> &str {
        self.name_of(self.current_player)
    }

    /// Placements since the last start or reset.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Empty squares, or none when the game is not active.
    pub fn open_positions(&self) -> Vec<Position> {
        if !self.is_active() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// The completed line of a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.phase {
            Phase::Finished(Finish::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    fn arm(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = Mark::X;
        self.phase = Phase::Active;
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = ModelInvariants::check_all(self) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(%descriptions, "Model invariant violated");
                debug_assert!(false, "Model invariant violated: {}", descriptions);
            }
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_name(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
