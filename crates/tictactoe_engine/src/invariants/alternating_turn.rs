//! Alternating turn invariant: cross and nought alternate, cross first.

use super::Invariant;
use crate::{Game, Side, Square};

/// Invariant: Players alternate turns.
///
/// Cross moves after an even number of moves, nought after an odd
/// number, and the board never holds more noughts than crosses or more
/// than one extra cross.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let expected = if game.move_count() % 2 == 0 {
            Side::Cross
        } else {
            Side::Nought
        };
        if game.turn().side() != expected {
            return false;
        }

        let count = |side| {
            game.board()
                .cells()
                .iter()
                .filter(|c| c.square() == Square::Occupied(side))
                .count()
        };
        let crosses = count(Side::Cross);
        let noughts = count(Side::Nought);

        crosses == noughts || crosses == noughts + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
