//! Alternating turn invariant: X and O take turns, X first.

use super::super::{GameHistory, Player};
use super::{Invariant, placed_square};

/// Invariant: the mark placed at ply k belongs to X when k is odd and to O
/// when k is even.
///
/// Steps that are not a single placement are left to `SinglePlyInvariant`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .boards()
            .windows(2)
            .enumerate()
            .all(|(move_index, pair)| match placed_square(&pair[0], &pair[1]) {
                Some((_, player)) => player == Player::for_move(move_index),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_alternating_marks_hold() {
        let mut history = GameHistory::new();
        let first = Board::new().with_mark(Position::Center, Player::X);
        history.play(first);
        history.play(first.with_mark(Position::TopLeft, Player::O));
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut history = GameHistory::new();
        history.play(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::new();
        let first = Board::new().with_mark(Position::Center, Player::X);
        history.play(first);
        history.play(first.with_mark(Position::TopLeft, Player::X));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
