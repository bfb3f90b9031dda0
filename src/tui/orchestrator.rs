//! Game orchestration between two players.

use super::players::Player;
use crate::game::{Board, Coord, MoveError, Outcome, Player as Mark};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Authoritative board state after a change.
    Board {
        /// Snapshot of the board.
        board: Board,
    },
    /// An automated player started searching.
    Thinking {
        /// Player display name.
        name: String,
    },
    /// A move was accepted.
    Moved {
        /// Player display name.
        name: String,
        /// The mark placed.
        mark: Mark,
        /// Where it was placed.
        coord: Coord,
    },
    /// A move was rejected; the same player will be asked again.
    Rejected {
        /// Player display name.
        name: String,
        /// Why the move was rejected.
        error: MoveError,
    },
    /// The game ended.
    Over {
        /// Final outcome.
        outcome: Outcome,
        /// Winner display name, if any.
        winner: Option<String>,
    },
}

/// Runs a single game between two players, reporting progress as events.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop to completion.
    pub async fn run(&mut self) -> Result<()> {
        info!(x = self.player_x.name(), o = self.player_o.name(), "starting game");

        self.event_tx.send(GameEvent::Board { board: self.board })?;

        loop {
            let outcome = self.board.classify();
            if outcome.is_over() {
                let winner = outcome.winner().map(|mark| self.name_of(mark).to_string());
                info!(%outcome, "game over");
                self.event_tx.send(GameEvent::Over { outcome, winner })?;
                return Ok(());
            }

            let mark = self.board.to_move();
            let name = self.name_of(mark).to_string();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if player.is_machine() {
                self.event_tx.send(GameEvent::Thinking { name: name.clone() })?;
            }

            debug!(player = %name, "waiting for move");
            let coord = player.get_move(&self.board).await?;

            match self.board.place(coord) {
                Ok(()) => {
                    debug!(player = %name, %coord, "move accepted");
                    self.event_tx.send(GameEvent::Moved {
                        name,
                        mark,
                        coord,
                    })?;
                    self.event_tx.send(GameEvent::Board { board: self.board })?;
                }
                Err(error) => {
                    // Re-prompt the same player rather than aborting.
                    warn!(player = %name, %coord, %error, "move rejected");
                    self.event_tx.send(GameEvent::Rejected { name, error })?;
                }
            }
        }
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }
}
