//! Exhaustive negamax search for the perfect opponent.
//!
//! The full game tree is at most nine plies deep, so the search visits it
//! exhaustively: no pruning, no transposition table, no depth limit.

use super::board::Board;
use super::types::{Coord, Outcome, Player};
use tracing::{debug, instrument};

/// Score of a win for X, from the fixed X perspective.
const WIN_SCORE: i32 = 1000;

/// Lower bound below any reachable score.
const SCORE_FLOOR: i32 = -2 * WIN_SCORE;

/// Errors from requesting a move on a board the search cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The game is already decided or drawn.
    #[display("game is already over: {}", _0)]
    GameOver(Outcome),
    /// No empty squares remain; unreachable on an in-progress board.
    #[display("no legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for SearchError {}

/// Scores a terminal board from the fixed X perspective: +1000 when X has
/// won, -1000 when O has won, 0 for a draw.
fn evaluate(board: &Board) -> i32 {
    match board.classify() {
        Outcome::Won(Player::X) => WIN_SCORE,
        Outcome::Won(Player::O) => -WIN_SCORE,
        Outcome::Draw | Outcome::InProgress => 0,
    }
}

/// Returns the best achievable score for the side to move, searching the
/// remaining tree to the end.
///
/// At a terminal node (decided or full) the fixed-sign evaluation is
/// reinterpreted for the mover: unchanged when X is to move, negated when
/// O is. At interior nodes each legal move is applied, scored through the
/// opponent's eyes, negated, and reverted; the maximum survives. Every
/// apply pairs with a revert, so the board is identical when the call
/// returns.
fn negamax(board: &mut Board) -> i32 {
    if board.classify().is_over() {
        let score = evaluate(board);
        return if board.to_move() == Player::X {
            score
        } else {
            -score
        };
    }

    let mut best = SCORE_FLOOR;
    for coord in board.legal_moves() {
        board.apply(coord);
        best = best.max(-negamax(board));
        board.revert(coord);
    }

    best
}

/// Chooses the optimal move for the side to move.
///
/// Candidates are tried in row-major order and only a strictly better
/// score replaces the incumbent, so ties keep the earliest move and the
/// choice is deterministic. The board is restored to its exact content
/// and turn before returning.
///
/// # Errors
///
/// Returns [`SearchError::GameOver`] when called on a decided or full
/// board; the recursion's scoring assumptions hold only for in-progress
/// positions.
#[instrument(skip(board), fields(to_move = %board.to_move()))]
pub fn choose_best_move(board: &mut Board) -> Result<Coord, SearchError> {
    let outcome = board.classify();
    if outcome.is_over() {
        return Err(SearchError::GameOver(outcome));
    }

    let mut best: Option<(Coord, i32)> = None;
    for coord in board.legal_moves() {
        board.apply(coord);
        let score = -negamax(board);
        board.revert(coord);
        if best.is_none_or(|(_, incumbent)| score > incumbent) {
            best = Some((coord, score));
        }
    }

    match best {
        Some((coord, score)) => {
            debug!(%coord, score, "search complete");
            Ok(coord)
        }
        None => Err(SearchError::NoLegalMoves),
    }
}
