//! Win detection for tic-tac-toe.

use super::board::Board;
use super::types::{Coord, Player, Square};

/// The eight winning lines in the order they are scanned: rows top to
/// bottom, columns left to right, main diagonal, anti-diagonal.
///
/// The first complete line found decides the reported winner, so the
/// order is fixed.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Checks for three identical marks along any line.
///
/// Returns the owner of the first complete line in scan order, `None`
/// otherwise.
pub(crate) fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let square = board.get(a);
        if square != Square::Empty && square == board.get(b) && square == board.get(c) {
            return match square {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills squares through the unchecked path, alternating from X.
    fn stack(board: &mut Board, coords: &[(u8, u8)]) {
        for &(row, col) in coords {
            board.apply(Coord::at(row, col));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        // X takes the top row, O answers in the middle row.
        stack(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        stack(&mut board, &[(1, 0), (0, 2), (2, 2), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        stack(&mut board, &[(0, 0), (1, 1), (0, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_on_malformed_board() {
        let mut board = Board::new();
        // Both the X top row and the O bottom row are complete; such a
        // board cannot arise from normal play, but the scan order makes
        // the report deterministic: rows are checked top first.
        stack(&mut board, &[(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
