//! Application state for the game screen.

use super::GameMode;
use super::orchestrator::GameEvent;
use crate::game::{Board, Coord, Outcome, Player as Mark};
use tracing::debug;

/// View state backing the game screen, kept in sync with orchestrator
/// events.
pub struct App {
    mode: GameMode,
    board: Board,
    cursor: Coord,
    status: String,
    outcome: Option<Outcome>,
    thinking: bool,
}

impl App {
    /// Creates state for a fresh game in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board: Board::new(),
            // Start on the center square.
            cursor: Coord::ALL[4],
            status: String::from("Player X to move"),
            outcome: None,
            thinking: false,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Board snapshot to render.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Coord) {
        self.cursor = cursor;
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while the game is running.
    pub fn in_progress(&self) -> bool {
        self.outcome.is_none()
    }

    /// Side to move on the rendered board.
    pub fn to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// True while an automated player searches.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// Applies an orchestrator event to the view state.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::Board { board } => {
                self.board = board;
            }
            GameEvent::Thinking { name } => {
                self.thinking = true;
                self.status = format!("{name} is thinking...");
            }
            GameEvent::Moved { name, mark, coord } => {
                self.thinking = false;
                self.status = format!("{name} played {mark} at {coord}");
            }
            GameEvent::Rejected { name, error } => {
                self.status = format!("{name}: {error}. Try again.");
            }
            GameEvent::Over { outcome, winner } => {
                self.thinking = false;
                self.outcome = Some(outcome);
                self.status = match winner {
                    Some(name) => {
                        format!("{name} wins! Press 'r' to replay, 'm' for menu, 'q' to quit.")
                    }
                    None => "Draw! Press 'r' to replay, 'm' for menu, 'q' to quit.".to_string(),
                };
            }
        }
    }
}
