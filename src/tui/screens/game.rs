//! Game screen: the board, the status line and the "new game" control.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{GameModel, Outcome, Phase, Position};
use crate::status::status_message;
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{board, game_layout};

/// Key help shown under the status line.
const HELP: &str = "Arrows: Move | Enter/1-9/Click: Mark | N: New Game | E: Names | Q: Quit";

/// State for the board screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    cursor: Position,
}

impl GameScreen {
    /// Creates the screen with the cursor on the center square.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self {
            cursor: Position::Center,
        }
    }

    #[instrument(skip(self, model))]
    fn mark(&mut self, pos: Position, model: &mut GameModel) -> ScreenTransition {
        self.cursor = pos;
        let outcome = model.place(pos);
        match outcome {
            Outcome::Ignored => debug!("Placement ignored"),
            Outcome::Win { player, .. } => info!(?player, "Game won"),
            Outcome::Draw => info!("Game drawn"),
            Outcome::Continued { next_player } => debug!(?next_player, "Turn passed"),
        }
        ScreenTransition::Stay
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, model))]
    fn render(&self, frame: &mut Frame, model: &GameModel) {
        let layout = game_layout(frame.area());

        let title = Paragraph::new(format!(
            "{} (X)  vs  {} (O)",
            model.player_x_name(),
            model.player_o_name()
        ))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
        frame.render_widget(title, layout.title);

        board::render_board(frame, layout.board, model, Some(self.cursor));

        let status_style = match model.phase() {
            Phase::Finished(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::Yellow),
        };
        let status = Paragraph::new(status_message(model))
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout.status);

        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, key, model))]
    fn handle_key(&mut self, key: KeyEvent, model: &mut GameModel) -> ScreenTransition {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.mark(self.cursor, model),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let square = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index);
                match square {
                    Some(pos) => self.mark(pos, model),
                    None => ScreenTransition::Stay,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("New game requested");
                model.reset();
                self.cursor = Position::Center;
                ScreenTransition::Stay
            }
            KeyCode::Char('e') | KeyCode::Char('E') => ScreenTransition::GoToNameEntry,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, mouse, model))]
    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        model: &mut GameModel,
    ) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        let layout = game_layout(area);
        match board::cell_at(layout.board, mouse.column, mouse.row) {
            Some(pos) => self.mark(pos, model),
            None => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn started() -> GameModel {
        let mut model = GameModel::new();
        model.start_game("Ann", "Bo");
        model
    }

    fn press(screen: &mut GameScreen, model: &mut GameModel, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), model)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_marks_cursor_square() {
        let mut model = started();
        let mut screen = GameScreen::new();

        press(&mut screen, &mut model, KeyCode::Up);
        press(&mut screen, &mut model, KeyCode::Left);
        press(&mut screen, &mut model, KeyCode::Enter);

        assert_eq!(*screen.cursor(), Position::TopLeft);
        assert!(!model.board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_digit_marks_square_by_number() {
        let mut model = started();
        let mut screen = GameScreen::new();

        press(&mut screen, &mut model, KeyCode::Char('9'));
        assert!(!model.board().is_empty(Position::BottomRight));
        assert_eq!(*screen.cursor(), Position::BottomRight);

        // 0 is not a square.
        press(&mut screen, &mut model, KeyCode::Char('0'));
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn test_new_game_resets_model() {
        let mut model = started();
        let mut screen = GameScreen::new();
        press(&mut screen, &mut model, KeyCode::Char('5'));

        press(&mut screen, &mut model, KeyCode::Char('n'));

        assert!(model.history().is_empty());
        assert!(model.is_active());
        assert_eq!(model.player_x_name(), "Ann");
    }

    #[test]
    fn test_navigation_transitions() {
        let mut model = started();
        let mut screen = GameScreen::new();
        assert_eq!(
            press(&mut screen, &mut model, KeyCode::Char('e')),
            ScreenTransition::GoToNameEntry
        );
        assert_eq!(press(&mut screen, &mut model, KeyCode::Char('q')), ScreenTransition::Quit);
    }

    #[test]
    fn test_click_marks_square_under_pointer() {
        let mut model = started();
        let mut screen = GameScreen::new();
        let area = Rect::new(0, 0, 60, 24);
        let rects = board::cell_rects(game_layout(area).board);
        let target = rects[Position::MiddleRight.to_index()];

        screen.handle_mouse(click(target.x + 2, target.y + 1), area, &mut model);

        assert!(!model.board().is_empty(Position::MiddleRight));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut model = started();
        let mut screen = GameScreen::new();

        screen.handle_mouse(click(0, 0), Rect::new(0, 0, 60, 24), &mut model);

        assert!(model.history().is_empty());
    }
}
