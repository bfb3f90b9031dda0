//! The engine seat: perfect play via exhaustive negamax.

use super::Player;
use crate::game::{Board, Coord, choose_best_move};
use anyhow::Result;
use tracing::debug;

/// Automated player that always plays a perfect move.
pub struct PerfectPlayer {
    name: String,
}

impl PerfectPlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for PerfectPlayer {
    async fn get_move(&mut self, board: &Board) -> Result<Coord> {
        debug!(player = %self.name, "searching");

        // Short pause so the thinking indicator is visible.
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;

        // The search mutates and restores its board; run it on a copy so
        // the orchestrator's board stays untouched.
        let mut scratch = *board;
        let coord = choose_best_move(&mut scratch)?;

        debug!(player = %self.name, %coord, "move chosen");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_machine(&self) -> bool {
        true
    }
}
