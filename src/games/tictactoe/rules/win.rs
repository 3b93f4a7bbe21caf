//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight straight lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions in a row, column, or diagonal holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    cells: [Position; 3],
    winner: Player,
}

impl WinningLine {
    /// The three positions of the line, in enumeration order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// The mark at the line's first cell.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first winning line on the board.
///
/// Lines are checked rows first, then columns, then diagonals. A board
/// with several complete lines reports the first one in that order.
#[instrument(level = "trace", skip(board))]
pub fn detect(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine {
                cells: [a, b, c],
                winner: player,
            })
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    detect(board).map(|line| line.winner())
}
