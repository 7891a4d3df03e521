//! Console front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: [`RunnerConfig`] loaded from TOML with command-line overrides
//! - **Console**: text rendering of the labelled grid and move list
//! - **Runner**: `watch`, `play` and persona listing loops over any
//!   reader/writer pair
//! - **Stats**: per-player [`Statistic`]s collected in a [`Scoreboard`]
//!
//! # Example
//!
//! ```
//! use tictactoe::{RunnerConfig, watch};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RunnerConfig::quiet().with_overrides(Some(2), None, Some(7));
//! let mut rng = tictactoe::rng_from_seed(*config.seed());
//! let mut out = Vec::new();
//! let scores = watch(&config, true, &mut rng, &mut out)?;
//! assert_eq!(scores.entries().iter().map(|s| *s.games()).sum::<u32>(), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod runner;
mod stats;

// Public modules
pub mod cli;
pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, RunnerConfig};

// Crate-level exports - Game loops
pub use runner::{list_personas, play, resolve_persona, rng_from_seed, watch};

// Crate-level exports - Statistics
pub use stats::{GameOutcome, Scoreboard, Statistic};

// Crate-level exports - Engine types used in the public API
pub use tictactoe_engine::{EngineError, Game, GameRecord, Persona};
