//! Engine error types.

use crate::{Position, Side, State};

/// Error raised by board, game, player, or factory operations.
///
/// Every failure is detected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The target square is already occupied.
    #[display("Position {position} is already taken")]
    IllegalMove {
        /// Position the move targeted.
        position: Position,
    },

    /// The moving player is not the one whose turn it is.
    #[display("It is not {side}'s turn")]
    OutOfTurn {
        /// Side of the player who tried to move.
        side: Side,
    },

    /// The game has already been decided.
    #[display("Game is not running ({state})")]
    NotRunning {
        /// State the game is in.
        state: State,
    },

    /// Both players were assigned the same side.
    #[display("Both players are assigned to {side}")]
    InvalidPlayers {
        /// The shared side.
        side: Side,
    },

    /// The factory does not know the named persona.
    #[display("Unknown opponent '{name}'")]
    UnknownOpponent {
        /// Name that failed to resolve.
        name: String,
    },

    /// A rule chain or search found nothing to play.
    #[display("Player cannot select a move")]
    NoMoveAvailable,

    /// Human moves come from outside the engine.
    #[display("{name} is human and must select their own moves")]
    HumanMoveNotAutomatable {
        /// Name of the human player.
        name: String,
    },
}

impl std::error::Error for EngineError {}
