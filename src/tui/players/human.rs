//! Human player fed by the keyboard loop.

use super::Player;
use crate::game::{Board, Coord};
use anyhow::Result;
use tokio::sync::mpsc;

/// Human player awaiting cell selections from the UI task.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<Coord>,
}

impl HumanPlayer {
    /// Creates a new human player reading selections from `input_rx`.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<Coord>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _board: &Board) -> Result<Coord> {
        match self.input_rx.recv().await {
            Some(coord) => Ok(coord),
            None => anyhow::bail!("input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
