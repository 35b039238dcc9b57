//! Name-entry screen: collect both player names, then start the game.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::GameModel;
use crate::tui::screen::{Screen, ScreenTransition};

/// Which text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// Name for X.
    #[default]
    PlayerX,
    /// Name for O.
    PlayerO,
}

impl NameField {
    /// Returns the other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::PlayerX => Self::PlayerO,
            Self::PlayerO => Self::PlayerX,
        }
    }
}

/// State for the name-entry form.
#[derive(Debug, Getters)]
pub struct NameEntryScreen {
    player_x: String,
    player_o: String,
    focus: NameField,
}

impl NameEntryScreen {
    /// Creates the form with both fields prefilled.
    #[instrument]
    pub fn new(player_x: String, player_o: String) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            player_x,
            player_o,
            focus: NameField::default(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::PlayerX => &mut self.player_x,
            NameField::PlayerO => &mut self.player_o,
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: NameField) {
        let (title, value) = match field {
            NameField::PlayerX => ("Player 1 (X)", self.player_x.as_str()),
            NameField::PlayerO => ("Player 2 (O)", self.player_o.as_str()),
        };
        let focused = self.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(value)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );
        frame.render_widget(input, area);

        if focused {
            let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(offset)
                .min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _model))]
    fn render(&self, frame: &mut Frame, _model: &GameModel) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Enter Player Names")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
        frame.render_widget(title, chunks[0]);

        self.render_field(frame, chunks[1], NameField::PlayerX);
        self.render_field(frame, chunks[2], NameField::PlayerO);

        let help = Paragraph::new("Tab: Switch field | Enter: Start Game | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, model))]
    fn handle_key(&mut self, key: KeyEvent, model: &mut GameModel) -> ScreenTransition {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.focused_mut().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                model.start_game(&self.player_x, &self.player_o);
                info!(
                    player_x = %model.player_x_name(),
                    player_o = %model.player_o_name(),
                    "Names confirmed"
                );
                ScreenTransition::GoToGame
            }
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
