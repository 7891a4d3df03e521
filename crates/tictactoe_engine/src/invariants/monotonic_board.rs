//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Game, Side};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board, alternating cross and
/// nought, must succeed without hitting an occupied square and must
/// reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for (i, position) in game.moves().iter().enumerate() {
            let side = if i % 2 == 0 { Side::Cross } else { Side::Nought };
            if reconstructed.place(*position, side).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
