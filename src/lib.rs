//! Tic-tac-toe timeline - a two-player game engine with move-history time travel
//!
//! # Architecture
//!
//! - **Rules**: pure win and full-board detection over a board snapshot
//! - **History**: linear log of snapshots with a movable pointer
//! - **Ledger**: per-player win tally and a newest-first winner log
//! - **Controller**: owns history and ledger for one session and decides
//!   when a finished game is scored
//!
//! A win is scored only when the player jumps back to the start while
//! viewing the final, winning move of the log.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{FixedClock, GameController, Player, Position};
//!
//! let mut game = GameController::with_clock(FixedClock::at(9, 30));
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//!     Position::BottomRight,
//! ] {
//!     game.play_at(pos);
//! }
//! assert_eq!(game.status().to_string(), "Player X wins!");
//!
//! let event = game.jump_to(0).unwrap().unwrap();
//! assert_eq!(event.to_string(), "9:30am P1 (X) Wins");
//! assert_eq!(game.tally().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Clock, FixedClock, GameController, GameHistory, GameSnapshot, GameStatus,
    HistoryError, Intent, IntentOutcome, IntentParseError, MoveEntry, PlayOutcome, Player,
    Position, ScoreLedger, ScoreTally, Square, SystemClock, WinEvent, WinningLine, detect,
    format_clock_time, is_full, move_label, move_list,
};

// Crate-level exports - Invariants and rules modules
pub use games::tictactoe::{invariants, rules};
