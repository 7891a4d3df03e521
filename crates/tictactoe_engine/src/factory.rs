//! Ready-made games: persona against persona, or human against persona.

use crate::{EngineError, Game, Persona, Player, Side};
use rand::{Rng, RngCore};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A human-versus-computer game plus handles to both participants.
#[derive(Debug, Clone)]
pub struct UserGame {
    /// The game itself.
    pub game: Game,
    /// The human participant.
    pub human: Player,
    /// The computer participant.
    pub computer: Player,
}

/// Creates a game between two different, randomly chosen personas.
///
/// The first persona drawn plays nought, the second plays cross.
#[instrument(skip(rng))]
pub fn computer_game(rng: &mut dyn RngCore) -> Result<Game, EngineError> {
    let nought = random_persona(rng, None);
    let cross = random_persona(rng, Some(nought));
    debug!(%cross, %nought, "Drew personas");

    Game::new(
        Player::computer(nought, Side::Nought),
        Player::computer(cross, Side::Cross),
    )
}

/// Creates a game between a human and the named persona.
///
/// Sides are assigned by a coin flip.
///
/// # Errors
///
/// Returns [`EngineError::UnknownOpponent`] if `opponent` names no persona.
#[instrument(skip(rng))]
pub fn user_versus(opponent: &str, rng: &mut dyn RngCore) -> Result<UserGame, EngineError> {
    let persona = Persona::from_name(opponent)?;
    user_versus_persona(persona, rng)
}

/// Creates a game between a human and `persona`, sides by coin flip.
#[instrument(skip(rng))]
pub fn user_versus_persona(
    persona: Persona,
    rng: &mut dyn RngCore,
) -> Result<UserGame, EngineError> {
    let human_side = if rng.gen_range(0..2) == 0 {
        Side::Nought
    } else {
        Side::Cross
    };

    let human = Player::human(human_side);
    let computer = Player::computer(persona, human_side.opponent());
    let game = Game::new(human.clone(), computer.clone())?;
    debug!(human_side = %human_side, %persona, "User game created");

    Ok(UserGame {
        game,
        human,
        computer,
    })
}

fn random_persona(rng: &mut dyn RngCore, exclude: Option<Persona>) -> Persona {
    let choices: Vec<Persona> = Persona::iter().filter(|p| Some(*p) != exclude).collect();
    choices[rng.gen_range(0..choices.len())]
}
