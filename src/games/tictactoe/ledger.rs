//! Session score ledger: per-player win counts and a winner timeline.

use super::clock::{Clock, SystemClock, format_clock_time};
use super::rules::detect;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// Wins per player for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    x: u32,
    o: u32,
}

impl ScoreTally {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Wins recorded for both players combined.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) | ({}) {}",
            self.x,
            Player::X.seat(),
            Player::O.seat(),
            self.o
        )
    }
}

/// One entry in the winner timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WinEvent {
    /// Time of day the win was recorded, e.g. `3:07pm`.
    timestamp: String,
    /// Player who won.
    player: Player,
    /// Timeline message, e.g. `P1 (X) Wins`.
    message: String,
}

impl std::fmt::Display for WinEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.timestamp, self.message)
    }
}

/// Tally of wins plus the newest-first winner log.
///
/// `record_win` is not idempotent; callers decide when a finished game counts.
#[derive(Debug, Clone)]
pub struct ScoreLedger<C = SystemClock> {
    tally: ScoreTally,
    log: VecDeque<WinEvent>,
    clock: C,
}

impl ScoreLedger<SystemClock> {
    /// Creates an empty ledger stamping events with local time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::local())
    }
}

impl Default for ScoreLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ScoreLedger<C> {
    /// Creates an empty ledger using `clock` for timestamps.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tally: ScoreTally::default(),
            log: VecDeque::new(),
            clock,
        }
    }

    /// Records a win if `board` has a winning line.
    ///
    /// Returns the new event, or `None` when the board has no winner.
    #[instrument(skip(self, board), fields(total = self.tally.total()))]
    pub fn record_win(&mut self, board: &Board) -> Option<WinEvent> {
        let Some(line) = detect(board) else {
            debug!("No winning line, nothing to record");
            return None;
        };

        let player = line.winner();
        self.tally.increment(player);

        let event = WinEvent {
            timestamp: format_clock_time(self.clock.now()),
            player,
            message: player.win_message().to_string(),
        };
        self.log.push_front(event.clone());

        info!(
            %player,
            timestamp = %event.timestamp,
            wins = self.tally.wins(player),
            "Win recorded"
        );
        Some(event)
    }

    /// Current win counts.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Winner timeline, newest first.
    pub fn winner_log(&self) -> &VecDeque<WinEvent> {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{FixedClock, Position, Square};

    fn row_win(player: Player) -> Board {
        let mut board = Board::new();
        for pos in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_is_noop() {
        let mut ledger = ScoreLedger::with_clock(FixedClock::at(10, 0));
        assert_eq!(ledger.record_win(&Board::new()), None);
        assert_eq!(ledger.tally().total(), 0);
        assert!(ledger.winner_log().is_empty());
    }

    #[test]
    fn test_records_winner_and_message() {
        let mut ledger = ScoreLedger::with_clock(FixedClock::at(14, 7));
        let event = ledger.record_win(&row_win(Player::O)).expect("O should win");

        assert_eq!(event.timestamp(), "2:07pm");
        assert_eq!(*event.player(), Player::O);
        assert_eq!(event.message(), "P2 (O) Wins");
        assert_eq!(ledger.tally().wins(Player::O), 1);
        assert_eq!(ledger.tally().wins(Player::X), 0);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut ledger = ScoreLedger::with_clock(FixedClock::at(8, 0));
        ledger.record_win(&row_win(Player::X));
        ledger.record_win(&row_win(Player::O));

        let players: Vec<Player> = ledger.winner_log().iter().map(|e| *e.player()).collect();
        assert_eq!(players, vec![Player::O, Player::X]);
    }

    #[test]
    fn test_repeated_calls_double_count() {
        let mut ledger = ScoreLedger::with_clock(FixedClock::at(8, 0));
        let board = row_win(Player::X);
        ledger.record_win(&board);
        ledger.record_win(&board);

        assert_eq!(ledger.tally().wins(Player::X), 2);
        assert_eq!(ledger.winner_log().len(), 2);
    }

    #[test]
    fn test_tally_display() {
        let mut ledger = ScoreLedger::with_clock(FixedClock::at(8, 0));
        ledger.record_win(&row_win(Player::X));
        assert_eq!(ledger.tally().to_string(), "1 (P1) | (P2) 0");
    }
}
