//! Controller: owns the model and the active screen, runs the event loop.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::games::tictactoe::GameModel;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{GameScreen, NameEntryScreen};

/// Active screen in the UI state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Collecting player names.
    NameEntry(NameEntryScreen),
    /// Playing on the board.
    Game(GameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }
}

/// Drives the UI: one [`GameModel`] shared by every screen.
#[derive(Debug, Getters)]
pub struct Controller {
    model: GameModel,
    screen: ActiveScreen,
}

impl Controller {
    /// Starts on the name-entry form, prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        info!("Creating Controller");
        Self {
            model: GameModel::new(),
            screen: ActiveScreen::NameEntry(NameEntryScreen::new(
                config.player_x().to_string(),
                config.player_o().to_string(),
            )),
        }
    }

    /// Skips name entry and starts a game immediately.
    #[instrument]
    pub fn with_players(player_x: &str, player_o: &str) -> Self {
        let mut model = GameModel::new();
        model.start_game(player_x, player_o);
        Self {
            model,
            screen: ActiveScreen::Game(GameScreen::new()),
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, &self.model);
    }

    /// Routes one terminal event to the active screen.
    ///
    /// `area` is the frame size the event refers to. Returns `true` when the
    /// application should exit.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        let transition = match event {
            Event::Key(key) => {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    ScreenTransition::Quit
                } else {
                    self.screen.as_screen_mut().handle_key(*key, &mut self.model)
                }
            }
            Event::Mouse(mouse) => {
                self.screen
                    .as_screen_mut()
                    .handle_mouse(*mouse, area, &mut self.model)
            }
            _ => ScreenTransition::Stay,
        };

        self.apply(transition)
    }

    fn apply(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => false,
            ScreenTransition::GoToGame => {
                debug!("Switching to game screen");
                self.screen = ActiveScreen::Game(GameScreen::new());
                false
            }
            ScreenTransition::GoToNameEntry => {
                debug!("Switching to name entry");
                self.screen = ActiveScreen::NameEntry(NameEntryScreen::new(
                    self.model.player_x_name().to_string(),
                    self.model.player_o_name().to_string(),
                ));
                false
            }
            ScreenTransition::Quit => {
                info!("Quit requested");
                true
            }
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                self.render(f);
            })?;

            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                if self.handle_event(&event, area) {
                    return Ok(());
                }
            }
        }
    }
}
