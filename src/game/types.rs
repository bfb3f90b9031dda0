//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A board coordinate: zero-based row and column, each in `0..=2`.
///
/// The fields are private and every constructor is checked, so a `Coord`
/// always references a real cell and out-of-range coordinates are
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// All nine coordinates in row-major order: (0,0), (0,1), ..., (2,2).
    ///
    /// Move enumeration and the search tie-break both follow this order,
    /// so it must stay row-major.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Constructor for coordinates known to be in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "coordinate out of range");
        Self { row, col }
    }

    /// Creates a coordinate, rejecting out-of-range rows or columns.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Self::new(index / 3, index % 3)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of classifying a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player has three in a row.
    Won(Player),
    /// The board is full with no winner.
    Draw,
    /// The game is still going.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// True once the game is decided or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "player {player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}
