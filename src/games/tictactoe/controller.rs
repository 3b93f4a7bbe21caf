//! Game controller: the session's single owner of history and score.
//!
//! The presentation layer holds a `GameController` and feeds it intents.
//! Whose turn it is and whether the game is over are always derived from
//! the history pointer and the board, never stored.

use super::action::{Intent, IntentOutcome, PlayOutcome};
use super::clock::{Clock, SystemClock};
use super::history::{GameHistory, HistoryError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::ledger::{ScoreLedger, ScoreTally, WinEvent};
use super::rules::{WinningLine, detect};
use super::snapshot::{GameSnapshot, GameStatus};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Orchestrates history navigation and win scoring for one session.
#[derive(Debug, Clone)]
pub struct GameController<C = SystemClock> {
    history: GameHistory,
    ledger: ScoreLedger<C>,
}

impl GameController<SystemClock> {
    /// Starts a session stamping wins with local time.
    #[instrument]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::local())
    }
}

impl Default for GameController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameController<C> {
    /// Starts a session using `clock` for winner-log timestamps.
    pub fn with_clock(clock: C) -> Self {
        info!("Starting new session");
        Self {
            history: GameHistory::new(),
            ledger: ScoreLedger::with_clock(clock),
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Rejected without any state change when the square is taken or the
    /// viewed board already has a winning line. Never records a win.
    #[instrument(skip(self), fields(current = self.history.current()))]
    pub fn play_at(&mut self, position: Position) -> PlayOutcome {
        let board = *self.history.current_board();

        if detect(&board).is_some() {
            warn!(%position, "Play rejected: game already won");
            return PlayOutcome::GameOver;
        }
        if !board.is_empty(position) {
            warn!(%position, "Play rejected: square occupied");
            return PlayOutcome::Occupied(position);
        }

        let player = self.history.next_player();
        self.history.play(board.with_mark(position, player));
        debug_assert!(
            HistoryInvariants::check_all(&self.history).is_ok(),
            "history invariants violated after play"
        );

        debug!(%player, %position, current = self.history.current(), "Mark placed");
        PlayOutcome::Placed { player, position }
    }

    /// Moves the history pointer to `target`.
    ///
    /// Jumping to the start while viewing the last snapshot of a won game
    /// records that win first. No other navigation scores. Out-of-range
    /// targets are rejected before anything changes.
    #[instrument(skip(self), fields(current = self.history.current(), len = self.history.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<Option<WinEvent>, HistoryError> {
        self.history.check_index(target)?;

        let recorded = if target == 0 && self.history.is_at_latest() {
            let latest = *self.history.latest();
            self.ledger.record_win(&latest)
        } else {
            None
        };

        self.history.jump_to(target)?;
        debug!(scored = recorded.is_some(), "Jumped");
        Ok(recorded)
    }

    /// Dispatches an intent from the presentation layer.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome, HistoryError> {
        match intent {
            Intent::PlayAt(position) => Ok(IntentOutcome::Played(self.play_at(position))),
            Intent::JumpTo(target) => {
                let recorded = self.jump_to(target)?;
                Ok(IntentOutcome::Jumped {
                    to: target,
                    recorded,
                })
            }
        }
    }

    /// The move history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The score ledger.
    pub fn ledger(&self) -> &ScoreLedger<C> {
        &self.ledger
    }

    /// Board being viewed.
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    /// Index of the board being viewed.
    pub fn current_move(&self) -> usize {
        self.history.current()
    }

    /// Player to move from the viewed board.
    pub fn next_player(&self) -> Player {
        self.history.next_player()
    }

    /// Winning line on the viewed board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect(self.board())
    }

    /// Session win counts.
    pub fn tally(&self) -> ScoreTally {
        self.ledger.tally()
    }

    /// Derived status of the viewed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board(), self.current_move())
    }

    /// Captures everything the presentation layer renders.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(
            self.history.boards(),
            self.history.current(),
            self.ledger.tally(),
            self.ledger.winner_log().iter().cloned().collect(),
        )
    }
}
