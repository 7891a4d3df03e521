//! Tic-tac-toe engine and computer opponents.
//!
//! # Architecture
//!
//! - **Board**: nine [`Cell`]s plus derived [`Line`]s, corners, edges and
//!   winning-square detection
//! - **Game**: turn-taking state machine that validates moves and detects
//!   wins and draws
//! - **Players**: humans, whose moves come from outside, and computer
//!   [`Persona`]s that run an ordered chain of [`Rule`]s
//! - **Analyzer**: exhaustive minimax search used by [`Rule::Minimax`]
//!
//! Randomness is always injected, so a seeded generator makes every
//! persona reproducible.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{Game, Persona, Player, Side, State};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = Game::new(
//!     Player::computer(Persona::SimaYi, Side::Cross),
//!     Player::computer(Persona::SimaYi, Side::Nought),
//! )?;
//!
//! while game.is_running() {
//!     let player = game.turn().clone();
//!     let position = player.select_move(game.move_count(), game.board(), &mut rng)?;
//!     game.make_move(&player, position)?;
//! }
//!
//! assert_eq!(game.state(), State::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod line;
mod player;
mod position;
mod record;
mod types;

// Public modules
pub mod analyzer;
pub mod factory;
pub mod invariants;
pub mod rules;

// Crate-level exports - Geometry
pub use board::Board;
pub use line::Line;
pub use position::Position;
pub use types::{Cell, Side, Square, State};

// Crate-level exports - Game
pub use error::EngineError;
pub use factory::UserGame;
pub use game::Game;
pub use record::GameRecord;

// Crate-level exports - Players
pub use player::{DEFAULT_CELEBRATION, HUMAN_NAME, Persona, Player, PlayerKind};
pub use rules::Rule;
