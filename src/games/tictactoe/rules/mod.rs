//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); the model decides when to
//! call them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};
