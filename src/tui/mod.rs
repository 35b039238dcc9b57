//! Terminal front end.
//!
//! A name-entry form followed by the board, both driving one
//! [`GameModel`](crate::games::tictactoe::GameModel) owned by the
//! [`Controller`].

mod controller;
mod input;
mod screen;
mod screens;
pub mod ui;

pub use controller::{ActiveScreen, Controller};
pub use input::move_cursor;
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameScreen, NameEntryScreen, NameField};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Takes over the terminal, runs `controller` until the user quits, and
/// restores the terminal even when the loop fails.
pub fn run_tui(mut controller: Controller) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
