//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_timeline::{Clock, GameController, PlayOutcome, Position};
use tracing::{debug, warn};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App<C: Clock> {
    game: GameController<C>,
    cursor: Position,
    selected: usize,
    status_message: String,
}

impl<C: Clock> App<C> {
    /// Creates a new application around a fresh session.
    pub fn new(game: GameController<C>) -> Self {
        Self {
            game,
            cursor: Position::Center,
            selected: 0,
            status_message: "Player X starts.".to_string(),
        }
    }

    /// The session being played.
    pub fn game(&self) -> &GameController<C> {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// History entry highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last feedback message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        debug!(?key, "Key pressed");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('[') | KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                self.selected = (self.selected + 1).min(self.game.history().len() - 1);
            }
            KeyCode::Char('g') => self.jump(self.selected),
            KeyCode::Char('s') => self.jump(0),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    fn play(&mut self, pos: Position) {
        self.status_message = match self.game.play_at(pos) {
            PlayOutcome::Placed { player, position } => {
                self.selected = self.game.current_move();
                format!("{} played {}", player, position)
            }
            PlayOutcome::Occupied(position) => format!("{} is already taken", position),
            PlayOutcome::GameOver => "Game over. Press 's' to go back to start.".to_string(),
        };
    }

    fn jump(&mut self, target: usize) {
        self.status_message = match self.game.jump_to(target) {
            Ok(Some(event)) => {
                self.selected = target;
                format!("{} at {}", event.message(), event.timestamp())
            }
            Ok(None) => {
                self.selected = target;
                format!("Viewing move #{}", target)
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                e.to_string()
            }
        };
    }
}
