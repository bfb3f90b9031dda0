//! Terminal tic-tac-toe with a perfect opponent.
//!
//! The core is a mutable 3x3 [`Board`] plus an exhaustive negamax search
//! ([`choose_best_move`]) that plays perfectly for whichever side is to
//! move. The [`tui`] module drives it: a ratatui interface with solo,
//! two-player, and engine-vs-engine modes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod tui;

pub use game::{Board, Coord, MoveError, Outcome, Player, SearchError, Square, choose_best_move};
