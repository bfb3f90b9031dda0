//! Scenario tests for the perfect-play search.

use tictactoe::{Board, Coord, Outcome, Player, SearchError, choose_best_move};

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("test coordinate in range")
}

fn play(board: &mut Board, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        board.place(coord(row, col)).expect("legal test move");
    }
}

#[test]
fn test_takes_immediate_win() {
    // X holds (0,0) and (0,1); (0,2) wins on the spot.
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(board.to_move(), Player::X);

    assert_eq!(choose_best_move(&mut board).unwrap(), coord(0, 2));
}

#[test]
fn test_blocks_opponent_win() {
    // O threatens the middle row at (1,2); X has no win of its own and
    // every non-blocking move loses, so the engine must block.
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (1, 0), (2, 2), (1, 1)]);
    assert_eq!(board.to_move(), Player::X);

    assert_eq!(choose_best_move(&mut board).unwrap(), coord(1, 2));
}

#[test]
fn test_tie_break_prefers_first_row_major_move() {
    // Perfect play from the empty board is a draw, so every opening
    // scores the same and the first candidate in scan order must win
    // the tie.
    let mut board = Board::new();
    assert_eq!(choose_best_move(&mut board).unwrap(), coord(0, 0));
}

#[test]
fn test_search_restores_board_and_is_deterministic() {
    let mut board = Board::new();
    play(&mut board, &[(1, 1), (0, 0)]);
    let before = board;

    let first = choose_best_move(&mut board).unwrap();
    assert_eq!(board, before);

    let second = choose_best_move(&mut board).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_engine_as_second_player_takes_center() {
    // Against a corner opening only the center reply holds the draw;
    // every other answer loses to perfect play. This pins the sign
    // convention when the engine moves second.
    let mut board = Board::new();
    play(&mut board, &[(0, 0)]);
    assert_eq!(board.to_move(), Player::O);

    assert_eq!(choose_best_move(&mut board).unwrap(), coord(1, 1));
}

#[test]
fn test_engine_as_second_player_takes_immediate_win() {
    // O holds (2,0) and (2,1) with O to move; (2,2) wins now. The
    // winning square is last in scan order, so a first-move default
    // would get this wrong.
    let mut board = Board::new();
    play(&mut board, &[(0, 0), (2, 0), (0, 1), (2, 1), (1, 1)]);
    assert_eq!(board.to_move(), Player::O);

    assert_eq!(choose_best_move(&mut board).unwrap(), coord(2, 2));
}

#[test]
fn test_perfect_play_always_draws() {
    // Engine vs engine from the empty board must end in a draw.
    let mut board = Board::new();
    while !board.classify().is_over() {
        let best = choose_best_move(&mut board).unwrap();
        board.place(best).unwrap();
    }
    assert_eq!(board.classify(), Outcome::Draw);
}

#[test]
fn test_search_rejects_finished_board() {
    let mut board = Board::new();
    // X wins the top row.
    play(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(board.classify(), Outcome::Won(Player::X));

    assert_eq!(
        choose_best_move(&mut board),
        Err(SearchError::GameOver(Outcome::Won(Player::X)))
    );

    let mut board = Board::new();
    // Drawn and full: also rejected.
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
    assert_eq!(
        choose_best_move(&mut board),
        Err(SearchError::GameOver(Outcome::Draw))
    );
}
