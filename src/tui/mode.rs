//! Game mode selection.

use strum::{Display, EnumIter};

/// Game mode: who sits in each seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Display, EnumIter)]
pub enum GameMode {
    /// Human plays X against the engine.
    #[strum(to_string = "Solo: play X against the computer")]
    SoloX,
    /// Human plays O; the engine opens.
    #[strum(to_string = "Solo: play O, computer opens")]
    SoloO,
    /// Two humans at one keyboard.
    #[strum(to_string = "Two players at one keyboard")]
    Versus,
    /// Engine against itself.
    #[strum(to_string = "Demo: computer against itself")]
    Demo,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::SoloX
    }
}
