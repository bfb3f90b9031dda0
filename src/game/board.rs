//! Mutable board state: the 3x3 grid plus the side to move.

use super::rules;
use super::types::{Coord, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board in row-major order, plus whose turn it is.
///
/// Mutation goes through [`Board::place`] and [`Board::undo`]; both either
/// fully apply or leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
    to_move: Player,
}

/// Errors from mutating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Target square already holds a mark.
    #[display("square {} is already occupied", _0)]
    Occupied(Coord),
    /// Target square holds no mark to remove.
    #[display("square {} is empty", _0)]
    Empty(Coord),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Returns the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.index()]
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty coordinates in row-major order.
    ///
    /// The search breaks score ties by keeping the first candidate, so
    /// this order is part of the engine's observable behavior.
    pub fn legal_moves(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// Classifies the current position.
    ///
    /// Lines are scanned in a fixed order (rows, columns, main diagonal,
    /// anti-diagonal) and the first complete line decides the winner; a
    /// full board with no line is a draw.
    pub fn classify(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(self) {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Places the mark of the side to move, then flips the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] without mutating if the square
    /// already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, coord: Coord) -> Result<(), MoveError> {
        if !self.is_empty(coord) {
            return Err(MoveError::Occupied(coord));
        }
        self.apply(coord);
        Ok(())
    }

    /// Removes the mark at `coord` and flips the turn back.
    ///
    /// Moves must be undone in reverse order of placement to preserve the
    /// alternation invariant; the caller enforces that ordering.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Empty`] without mutating if the square holds
    /// no mark.
    pub fn undo(&mut self, coord: Coord) -> Result<(), MoveError> {
        if self.is_empty(coord) {
            return Err(MoveError::Empty(coord));
        }
        self.revert(coord);
        Ok(())
    }

    /// Unchecked placement for the search; callers have already
    /// established emptiness via [`Board::legal_moves`].
    pub(crate) fn apply(&mut self, coord: Coord) {
        debug_assert!(self.is_empty(coord));
        self.squares[coord.index()] = Square::Occupied(self.to_move);
        self.to_move = self.to_move.opponent();
    }

    /// Inverse of [`Board::apply`].
    pub(crate) fn revert(&mut self, coord: Coord) {
        debug_assert!(!self.is_empty(coord));
        self.squares[coord.index()] = Square::Empty;
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
