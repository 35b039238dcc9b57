//! Screen trait and transition type for the UI state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::games::tictactoe::GameModel;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](super::Controller) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Go to the name-entry form.
    GoToNameEntry,
    /// Go to the board. The model has already been started.
    GoToGame,
    /// Exit the application.
    Quit,
}

/// Implemented by each screen of the UI.
///
/// Screens read and drive the shared [`GameModel`] but never own it.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, model: &GameModel);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent, model: &mut GameModel) -> ScreenTransition;

    /// Handles a mouse event; `area` is the full frame it was reported in.
    fn handle_mouse(
        &mut self,
        _mouse: MouseEvent,
        _area: Rect,
        _model: &mut GameModel,
    ) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
