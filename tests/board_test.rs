//! Integration tests for the board contract.

use tictactoe::{Board, Coord, MoveError, Outcome, Player, Square};

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("test coordinate in range")
}

/// Plays a sequence of moves, panicking on any rejection.
fn play(board: &mut Board, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        board.place(coord(row, col)).expect("legal test move");
    }
}

#[test]
fn test_legal_moves_row_major_on_empty_board() {
    let board = Board::new();
    let expected: Vec<Coord> = (0..3)
        .flat_map(|row| (0..3).map(move |col| coord(row, col)))
        .collect();
    assert_eq!(board.legal_moves(), expected);
}

#[test]
fn test_legal_moves_skip_occupied_squares() {
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (1, 1)]);
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    assert!(!moves.contains(&coord(0, 0)));
    assert!(!moves.contains(&coord(1, 1)));
    assert!(moves.contains(&coord(2, 2)));
}

#[test]
fn test_place_then_undo_restores_exact_state() {
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (1, 1)]);
    let before = board;

    let target = coord(2, 2);
    board.place(target).unwrap();
    board.undo(target).unwrap();

    assert_eq!(board, before);
    assert_eq!(board.to_move(), before.to_move());
}

#[test]
fn test_classify_not_decided_before_a_line_exists() {
    let mut board = Board::new();
    for (count, &(row, col)) in [(0, 0), (1, 1), (0, 1), (2, 2)].iter().enumerate() {
        board.place(coord(row, col)).unwrap();
        assert_eq!(
            board.classify(),
            Outcome::InProgress,
            "decided after {} moves",
            count + 1
        );
    }

    // X completes the top row.
    board.place(coord(0, 2)).unwrap();
    assert_eq!(board.classify(), Outcome::Won(Player::X));
}

#[test]
fn test_rejected_place_leaves_board_untouched() {
    let mut board = Board::new();
    play(&mut board, &[(1, 1)]);
    let before = board;

    assert_eq!(board.place(coord(1, 1)), Err(MoveError::Occupied(coord(1, 1))));
    assert_eq!(board, before);
    assert_eq!(board.to_move(), Player::O);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = Board::new();
    // X O X / O X X / O X O: full, no line for either side.
    play(
        &mut board,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );
    assert!(board.is_full());
    assert_eq!(board.classify(), Outcome::Draw);
}

#[test]
fn test_column_and_diagonal_wins_detected() {
    let mut board = Board::new();
    // X takes the left column.
    play(&mut board, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(board.classify(), Outcome::Won(Player::X));

    let mut board = Board::new();
    // O takes the main diagonal.
    play(&mut board, &[(0, 1), (0, 0), (0, 2), (1, 1), (1, 0), (2, 2)]);
    assert_eq!(board.classify(), Outcome::Won(Player::O));
}

#[test]
fn test_coord_constructors_reject_out_of_range() {
    assert!(Coord::new(3, 0).is_none());
    assert!(Coord::new(0, 3).is_none());
    assert!(Coord::from_index(9).is_none());
    assert_eq!(Coord::from_index(4), Some(coord(1, 1)));
}

#[test]
fn test_board_serde_round_trip() {
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (2, 2)]);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
    assert_eq!(restored.get(coord(0, 0)), Square::Occupied(Player::X));
    assert_eq!(restored.to_move(), Player::X);
}
