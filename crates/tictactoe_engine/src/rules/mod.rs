//! Move-selection rules for computer players.
//!
//! A rule inspects the board and either proposes one empty position or
//! declines. Personas chain rules in a fixed order and play the first
//! proposal. Rules hold no state; the only outside input is the injected
//! random source used by the random rules.

mod counter_corners;
mod random;
mod tactics;

pub use counter_corners::counter_corners;
pub use random::{random, random_corner, random_edge};
pub use tactics::{block, center, create_fork, first_move, win};

use crate::{Board, Position, Side, analyzer};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A move-selection strategy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Rule {
    /// Opening move: center, else a random corner. Only for the first two moves.
    FirstMove,
    /// Take the center.
    Center,
    /// Complete one of our own lines.
    Win,
    /// Take the square the opponent needs to complete a line.
    Block,
    /// Build on the first line the opponent has not touched.
    CreateFork,
    /// Answer corner attacks.
    CounterCorners,
    /// Any empty corner.
    RandomCorner,
    /// Any empty edge.
    RandomEdge,
    /// Any empty square.
    Random,
    /// Perfect play via exhaustive search.
    Minimax,
}

impl Rule {
    /// Proposes a position for `side`, or `None` to decline.
    ///
    /// A proposed position is always empty on `board`.
    #[instrument(level = "trace", skip(board, rng))]
    pub fn execute(
        self,
        move_count: usize,
        board: &Board,
        side: Side,
        rng: &mut dyn RngCore,
    ) -> Option<Position> {
        let proposal = match self {
            Rule::FirstMove => first_move(move_count, board, rng),
            Rule::Center => center(board),
            Rule::Win => win(board, side),
            Rule::Block => block(board, side),
            Rule::CreateFork => create_fork(board, side),
            Rule::CounterCorners => counter_corners(board, side, rng),
            Rule::RandomCorner => random_corner(board, rng),
            Rule::RandomEdge => random_edge(board, rng),
            Rule::Random => random(board, rng),
            Rule::Minimax => analyzer::search(board, side).ok(),
        };
        trace!(rule = %self, ?proposal, "Rule evaluated");
        proposal
    }
}

/// Picks uniformly from `positions` by index.
fn pick(positions: &[Position], rng: &mut dyn RngCore) -> Option<Position> {
    if positions.is_empty() {
        return None;
    }
    Some(positions[rng.gen_range(0..positions.len())])
}
