//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::Game;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.moves().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Side};

    #[test]
    fn test_moves_hold() {
        let x = Player::human_named("X", Side::Cross);
        let o = Player::human_named("O", Side::Nought);
        let mut game = Game::new(x.clone(), o.clone()).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));

        game.make_move(&x, Position::TopLeft).unwrap();
        game.make_move(&o, Position::MiddleCenter).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_corrupted_history_violates() {
        let x = Player::human_named("X", Side::Cross);
        let o = Player::human_named("O", Side::Nought);
        let mut game = Game::new(x.clone(), o).unwrap();
        game.make_move(&x, Position::MiddleCenter).unwrap();

        // Extra square without a history entry.
        game.board.place(Position::TopLeft, Side::Nought).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
