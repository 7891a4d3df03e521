//! Players and computer personas.

use crate::{Board, EngineError, Position, Rule, Side};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default display name for human players.
pub const HUMAN_NAME: &str = "You";

/// Default celebration for players without a persona.
pub const DEFAULT_CELEBRATION: &str = "Woohoo!";

/// A named computer opponent defined by its ordered rule chain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Persona {
    /// Has had a bit to drink and plays at random.
    Tipsy,
    /// Overly aggressive; attacks before defending.
    Genghis,
    /// Cautious; blocks before advancing.
    Boris,
    /// Boss level: perfect play.
    #[strum(serialize = "Sima Yi")]
    SimaYi,
}

impl Persona {
    /// Display name, as accepted by [`Persona::from_name`].
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Message shown when this persona wins.
    pub fn celebration(self) -> &'static str {
        match self {
            Persona::Tipsy => "Wow! What happened?!",
            Persona::Genghis => "I am the greatest!",
            Persona::Boris => "Patience wins the day!",
            Persona::SimaYi => "Ha ha ha ha ha ha!",
        }
    }

    /// Rules consulted in order when selecting a move.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Persona::Tipsy => &[Rule::Random],
            Persona::Genghis => &[
                Rule::Center,
                Rule::Win,
                Rule::CreateFork,
                Rule::Block,
                Rule::Random,
            ],
            Persona::Boris => &[
                Rule::FirstMove,
                Rule::Win,
                Rule::Block,
                Rule::CounterCorners,
                Rule::Center,
                Rule::CreateFork,
                Rule::Random,
            ],
            Persona::SimaYi => &[Rule::Minimax],
        }
    }

    /// Resolves a persona by its exact display name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownOpponent`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        name.parse().map_err(|_| EngineError::UnknownOpponent {
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a player's moves are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    Human,
    /// Moves come from the persona's rule chain.
    Computer(Persona),
}

/// A participant in a game.
///
/// Name, side, and celebration are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    side: Side,
    celebration: String,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player named "You".
    pub fn human(side: Side) -> Self {
        Self::human_named(HUMAN_NAME, side)
    }

    /// Creates a human player with a custom name.
    pub fn human_named(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            celebration: DEFAULT_CELEBRATION.to_string(),
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player for `persona`.
    pub fn computer(persona: Persona, side: Side) -> Self {
        Self {
            name: persona.name().to_string(),
            side,
            celebration: persona.celebration().to_string(),
            kind: PlayerKind::Computer(persona),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Message shown when this player wins.
    pub fn celebration(&self) -> &str {
        &self.celebration
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True for human players.
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Persona behind a computer player.
    pub fn persona(&self) -> Option<Persona> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(persona) => Some(persona),
        }
    }

    /// Selects the next move by running the persona's rule chain.
    ///
    /// # Errors
    ///
    /// - [`EngineError::HumanMoveNotAutomatable`] for human players.
    /// - [`EngineError::NoMoveAvailable`] if every rule declines.
    #[instrument(skip(self, board, rng), fields(player = %self.name, side = %self.side))]
    pub fn select_move(
        &self,
        move_count: usize,
        board: &Board,
        rng: &mut dyn RngCore,
    ) -> Result<Position, EngineError> {
        let persona = match self.kind {
            PlayerKind::Human => {
                return Err(EngineError::HumanMoveNotAutomatable {
                    name: self.name.clone(),
                });
            }
            PlayerKind::Computer(persona) => persona,
        };

        for rule in persona.rules() {
            if let Some(position) = rule.execute(move_count, board, self.side, rng) {
                debug!(%rule, %position, "Rule selected move");
                return Ok(position);
            }
        }

        Err(EngineError::NoMoveAvailable)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.side)
    }
}
