//! Exhaustive minimax search.
//!
//! The whole remaining game tree is searched (at most nine plies). Scores
//! are +10 when the searching side owns a line, -10 when the opponent does
//! and 0 for a full board without a line. There is no depth discount, so
//! among equally scored moves the first in row-major order is chosen.

use crate::line::LINES;
use crate::{Board, EngineError, Position, Side, Square};
use tracing::{debug, instrument};

const WIN: i32 = 10;
const LOSS: i32 = -10;

/// Finds the best move for `side` on `board`.
///
/// The search works on a private copy of the squares and takes the side
/// and opponent as arguments, so calls never interfere with each other.
///
/// # Errors
///
/// Returns [`EngineError::NoMoveAvailable`] if the board is full.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn search(board: &Board, side: Side) -> Result<Position, EngineError> {
    let mut squares = board.cells().map(|c| c.square());
    let opponent = side.opponent();
    let mut best: Option<(i32, Position)> = None;

    for position in Position::ALL {
        let index = position.to_index();
        if squares[index].is_occupied() {
            continue;
        }

        squares[index] = Square::Occupied(side);
        let score = minimax(&mut squares, side, opponent, false);
        squares[index] = Square::Empty;

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, position));
        }
    }

    let (score, position) = best.ok_or(EngineError::NoMoveAvailable)?;
    debug!(%position, score, "Minimax selected move");
    Ok(position)
}

fn minimax(squares: &mut [Square; 9], side: Side, opponent: Side, maximizing: bool) -> i32 {
    let score = evaluate(squares, side, opponent);
    if score != 0 {
        return score;
    }

    if squares.iter().all(|s| s.is_occupied()) {
        return 0;
    }

    let mover = if maximizing { side } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..squares.len() {
        if squares[index].is_occupied() {
            continue;
        }

        squares[index] = Square::Occupied(mover);
        let value = minimax(squares, side, opponent, !maximizing);
        squares[index] = Square::Empty;

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

fn evaluate(squares: &[Square; 9], side: Side, opponent: Side) -> i32 {
    for [a, b, c] in LINES {
        let first = squares[a.to_index()];
        if first == squares[b.to_index()] && first == squares[c.to_index()] {
            if first.is(side) {
                return WIN;
            }
            if first.is(opponent) {
                return LOSS;
            }
        }
    }
    0
}
