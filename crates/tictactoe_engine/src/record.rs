//! Serializable summary of a game.

use crate::{Game, Position, State};
use serde::{Deserialize, Serialize};

/// Snapshot of a game's participants, history, and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the cross player.
    pub cross: String,
    /// Name of the nought player.
    pub nought: String,
    /// Positions played, in order.
    pub moves: Vec<Position>,
    /// State when the snapshot was taken.
    pub state: State,
    /// Name of the winner, if the game was won.
    pub winner: Option<String>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            cross: game.player1().name().to_string(),
            nought: game.player2().name().to_string(),
            moves: game.moves().to_vec(),
            state: game.state(),
            winner: game.winner().map(|p| p.name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Persona, Player, Side};

    #[test]
    fn test_record_json_shape() {
        let tipsy = Player::computer(Persona::Tipsy, Side::Cross);
        let boris = Player::computer(Persona::Boris, Side::Nought);
        let mut game = Game::new(boris.clone(), tipsy.clone()).unwrap();
        game.make_move(&tipsy, Position::TopLeft).unwrap();
        game.make_move(&boris, Position::MiddleCenter).unwrap();

        let json = serde_json::to_value(GameRecord::from(&game)).unwrap();
        assert_eq!(json["cross"], "Tipsy");
        assert_eq!(json["nought"], "Boris");
        assert_eq!(json["moves"], serde_json::json!(["TopLeft", "MiddleCenter"]));
        assert_eq!(json["state"], "Running");
        assert!(json["winner"].is_null());
    }
}
