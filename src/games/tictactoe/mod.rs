//! Tic-tac-toe with move-history time travel and a session score ledger.

mod action;
mod clock;
mod controller;
mod history;
pub mod invariants;
mod ledger;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Intent, IntentOutcome, IntentParseError, PlayOutcome};
pub use clock::{Clock, FixedClock, SystemClock, format_clock_time};
pub use controller::GameController;
pub use history::{GameHistory, HistoryError};
pub use ledger::{ScoreLedger, ScoreTally, WinEvent};
pub use position::Position;
pub use rules::{WinningLine, detect, is_full};
pub use snapshot::{GameSnapshot, GameStatus, MoveEntry, move_label, move_list};
pub use types::{Board, Player, Square};
