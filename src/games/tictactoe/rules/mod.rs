//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Rules are kept apart
//! from history and scoring so every layer above can call them on demand
//! instead of storing derived state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, detect};
