//! Pointer invariant: the current move addresses an existing snapshot.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: the log is non-empty, starts from the empty board, and the
/// pointer lies inside it.
pub struct PointerInBoundsInvariant;

impl Invariant<GameHistory> for PointerInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.get(0) == Some(&Board::new()) && history.current() < history.len()
    }

    fn description() -> &'static str {
        "Current move lies inside a log that starts from the empty board"
    }
}
