//! Command-line interface.

use clap::Parser;
use tictactoe::tui::GameMode;

/// Terminal tic-tac-toe with a perfect opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about)]
pub struct Cli {
    /// Start directly in this mode instead of showing the menu.
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,
}
