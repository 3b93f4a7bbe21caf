//! Single-ply invariant: consecutive snapshots differ by one new mark.

use super::super::GameHistory;
use super::{Invariant, placed_square};

/// Invariant: each snapshot adds exactly one mark to an empty square of
/// the previous one, and changes nothing else.
pub struct SinglePlyInvariant;

impl Invariant<GameHistory> for SinglePlyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .boards()
            .windows(2)
            .all(|pair| placed_square(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
