//! Linear move history with time travel.
//!
//! The log is a flat list of board snapshots. Playing from an earlier
//! snapshot truncates everything after it, so branching is destructive:
//! abandoned futures are gone, there is no tree of variations.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Errors raised by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Requested move index is past the end of the log.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    MoveOutOfRange {
        /// Index that was requested.
        requested: usize,
        /// Number of snapshots in the log.
        len: usize,
    },
    /// A stored log failed validation on load.
    #[display("History log is not a valid game: {reason}")]
    InvalidLog {
        /// Invariants the log breaks, joined with `; `.
        #[error(not(source))]
        reason: String,
    },
}

/// Ordered log of board snapshots plus a pointer to the one being viewed.
///
/// Index 0 is always the empty board; index k is the board after k plies.
/// Deserialized logs are checked against [`HistoryInvariants`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    boards: Vec<Board>,
    current: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    boards: Vec<Board>,
    current: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            boards: raw.boards,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let reason = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reason, "Rejected stored history");
            HistoryError::InvalidLog { reason }
        })?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Commits `board` as the snapshot following the current one.
    ///
    /// Snapshots after the current pointer are discarded first.
    #[instrument(skip(self, board), fields(current = self.current, len = self.boards.len()))]
    pub fn play(&mut self, board: Board) {
        let discarded = self.boards.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating abandoned future moves");
        }
        self.boards.truncate(self.current + 1);
        self.boards.push(board);
        self.current = self.boards.len() - 1;
        debug!(current = self.current, "Snapshot committed");
    }

    /// Moves the pointer to `move_index` without touching the log.
    #[instrument(skip(self), fields(current = self.current, len = self.boards.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        self.check_index(move_index)?;
        self.current = move_index;
        debug!("Pointer moved");
        Ok(())
    }

    /// Fails unless `move_index` addresses an existing snapshot.
    pub fn check_index(&self, move_index: usize) -> Result<(), HistoryError> {
        if move_index < self.boards.len() {
            Ok(())
        } else {
            warn!(move_index, len = self.boards.len(), "Move index out of range");
            Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.boards.len(),
            })
        }
    }

    /// Index of the snapshot being viewed.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The snapshot being viewed.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// The last snapshot in the log.
    pub fn latest(&self) -> &Board {
        // Never empty: `new` seeds the log and `play` only truncates past `current`.
        &self.boards[self.boards.len() - 1]
    }

    /// Snapshot at `move_index`, if it exists.
    pub fn get(&self, move_index: usize) -> Option<&Board> {
        self.boards.get(move_index)
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Whether the pointer is on the last snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current == self.boards.len() - 1
    }

    /// Player to move from the current snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn history_with(positions: &[Position]) -> GameHistory {
        let mut history = GameHistory::new();
        for pos in positions {
            let next = history.current_board().with_mark(*pos, history.next_player());
            history.play(next);
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), 0);
        assert_eq!(*history.current_board(), Board::new());
        assert!(history.is_at_latest());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let history = history_with(&[Position::Center, Position::TopLeft]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), 2);
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut history = history_with(&[Position::Center, Position::TopLeft, Position::TopRight]);
        history.jump_to(1).unwrap();

        let branch = history.current_board().with_mark(Position::BottomLeft, Player::O);
        history.play(branch);

        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), 2);
        assert_eq!(*history.latest(), branch);
    }

    #[test]
    fn test_jump_keeps_log() {
        let mut history = history_with(&[Position::Center, Position::TopLeft]);
        let before = history.boards().to_vec();

        history.jump_to(0).unwrap();
        assert_eq!(history.current(), 0);
        assert_eq!(history.boards(), before.as_slice());
        assert!(!history.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = history_with(&[Position::Center]);
        let err = history.jump_to(2).unwrap_err();

        assert_eq!(err, HistoryError::MoveOutOfRange { requested: 2, len: 2 });
        assert_eq!(history.current(), 1);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_deserialize_rejects_empty_log() {
        let result = serde_json::from_str::<GameHistory>(r#"{"boards":[],"current":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_pointer_past_end() {
        let json = serde_json::to_string(&GameHistory::new()).unwrap().replace(
            r#""current":0"#,
            r#""current":7"#,
        );
        let err = serde_json::from_str::<GameHistory>(&json).unwrap_err();
        assert!(err.to_string().contains("not a valid game"));
    }

    #[test]
    fn test_deserialize_rejects_skipped_turn() {
        let mut history = GameHistory::new();
        history.play(Board::new().with_mark(Position::Center, Player::O));
        let json = serde_json::to_string(&history).unwrap();

        assert!(serde_json::from_str::<GameHistory>(&json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_played_log() {
        let mut history = history_with(&[Position::Center, Position::TopLeft]);
        history.jump_to(1).unwrap();
        let json = serde_json::to_string(&history).unwrap();

        let loaded: GameHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, history);
        assert_eq!(*loaded.current_board(), *history.current_board());
    }
}
