//! Cursor movement for keyboard navigation.

use crate::game::Coord;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the direction of an arrow key, staying on
/// the board.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => (row.checked_sub(1), Some(col)),
        KeyCode::Down => (Some(row + 1), Some(col)),
        KeyCode::Left => (Some(row), col.checked_sub(1)),
        KeyCode::Right => (Some(row), Some(col + 1)),
        _ => return cursor,
    };

    match target {
        (Some(row), Some(col)) => Coord::new(row, col).unwrap_or(cursor),
        _ => cursor,
    }
}
