//! User intents and their outcomes.
//!
//! Intents are what the presentation layer emits: a cell was clicked, or a
//! history entry was selected. They can be parsed from text, logged, and
//! dispatched through `GameController::apply`.

use super::ledger::WinEvent;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Something the player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the current player's mark at a position.
    PlayAt(Position),
    /// View the snapshot at a move index.
    JumpTo(usize),
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::PlayAt(pos) => write!(f, "play {}", pos.to_index()),
            Intent::JumpTo(index) => write!(f, "jump {}", index),
        }
    }
}

/// Error parsing a textual intent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IntentParseError {
    /// Input was blank.
    #[display("Empty intent")]
    Empty,

    /// First word is not a known command.
    #[display("Unknown command '{_0}' (expected 'play' or 'jump')")]
    UnknownCommand(#[error(not(source))] String),

    /// Command given without its argument.
    #[display("Missing argument for '{_0}'")]
    MissingArgument(#[error(not(source))] String),

    /// `play` argument is not a board position.
    #[display("Invalid position '{_0}' (expected 0-8 or a label like 'center')")]
    InvalidPosition(#[error(not(source))] String),

    /// `jump` argument is not a move index.
    #[display("Invalid move index '{_0}'")]
    InvalidMoveIndex(#[error(not(source))] String),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `play <0-8|label>`, `jump <n>`, or `start` (same as `jump 0`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or(IntentParseError::Empty)?.to_lowercase();
        let argument = words.collect::<Vec<_>>().join(" ");

        match command.as_str() {
            "start" => Ok(Intent::JumpTo(0)),
            "play" | "jump" if argument.is_empty() => {
                Err(IntentParseError::MissingArgument(command.clone()))
            }
            "play" => Position::from_label_or_number(&argument)
                .map(Intent::PlayAt)
                .ok_or(IntentParseError::InvalidPosition(argument)),
            "jump" => argument
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|_| IntentParseError::InvalidMoveIndex(argument)),
            _ => Err(IntentParseError::UnknownCommand(command.clone())),
        }
    }
}

/// Result of a play intent. Rejections leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The mark was placed and history advanced.
    Placed {
        /// Player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// The square already holds a mark.
    Occupied(Position),
    /// The viewed board already has a winning line.
    GameOver,
}

impl PlayOutcome {
    /// Whether the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Result of dispatching an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    /// A play intent was handled.
    Played(PlayOutcome),
    /// The pointer moved; carries the win recorded on the way, if any.
    Jumped {
        /// Move index now being viewed.
        to: usize,
        /// Win recorded by this jump.
        recorded: Option<WinEvent>,
    },
}
