//! Read-only views handed to the presentation layer.

use super::ledger::{ScoreTally, WinEvent};
use super::rules::{WinningLine, detect, is_full};
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status of the board being viewed, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet and at least one empty square.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A winning line is on the board.
    Won {
        /// Owner of the line.
        winner: Player,
        /// The line itself, for highlighting.
        line: WinningLine,
    },
    /// Board is full with no winning line.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` when `move_index` plies have been made.
    pub fn of(board: &Board, move_index: usize) -> Self {
        match detect(board) {
            Some(line) => GameStatus::Won {
                winner: line.winner(),
                line,
            },
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: Player::for_move(move_index),
            },
        }
    }

    /// Whether further plays are possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Player turn: {}", next),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins!", winner),
            GameStatus::Draw => write!(f, "Draw! No moves left."),
        }
    }
}

/// Label for the history entry at `move_index` while `current` is viewed.
pub fn move_label(move_index: usize, current: usize) -> String {
    if move_index == 0 {
        "Go to Start".to_string()
    } else if move_index == current {
        format!("Current Move (#{})", move_index)
    } else {
        format!("Go to move #{}", move_index)
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// Move index this row jumps to.
    index: usize,
    /// Button text.
    label: String,
    /// Whether this row is the snapshot being viewed.
    is_current: bool,
}

/// Builds the move list for a history of `len` snapshots.
pub fn move_list(len: usize, current: usize) -> Vec<MoveEntry> {
    (0..len)
        .map(|index| MoveEntry::new(index, move_label(index, current), index == current))
        .collect()
}

/// Everything the presentation layer reads, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Board being viewed.
    board: Board,
    /// Index of the board being viewed.
    current_move: usize,
    /// Whole history log, oldest first.
    history: Vec<Board>,
    /// Move list rows, one per history entry.
    moves: Vec<MoveEntry>,
    /// Session win counts.
    tally: ScoreTally,
    /// Winner timeline, newest first.
    winner_log: Vec<WinEvent>,
    /// Winning line on the viewed board, for highlighting.
    winning_line: Option<WinningLine>,
    /// Derived status of the viewed board.
    status: GameStatus,
    /// Status line text.
    status_line: String,
}

impl GameSnapshot {
    pub(crate) fn capture(
        history: &[Board],
        current_move: usize,
        tally: ScoreTally,
        winner_log: Vec<WinEvent>,
    ) -> Self {
        let board = history[current_move];
        let status = GameStatus::of(&board, current_move);
        let winning_line = match status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        };

        Self {
            board,
            current_move,
            history: history.to_vec(),
            moves: move_list(history.len(), current_move),
            tally,
            winner_log,
            winning_line,
            status,
            status_line: status.to_string(),
        }
    }
}
