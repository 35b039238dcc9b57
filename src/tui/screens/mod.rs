//! Screen implementations.

mod game;
mod name_entry;

pub use game::GameScreen;
pub use name_entry::{NameEntryScreen, NameField};
