//! Player trait and implementations.

mod human;
mod perfect;

pub use human::HumanPlayer;
pub use perfect::PerfectPlayer;

use crate::game::{Board, Coord};
use anyhow::Result;

/// A seat at the board: something that can produce moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Produces the next move for the current position.
    async fn get_move(&mut self, board: &Board) -> Result<Coord>;

    /// Display name for this player.
    fn name(&self) -> &str;

    /// True for automated players; drives the thinking indicator.
    fn is_machine(&self) -> bool {
        false
    }
}
