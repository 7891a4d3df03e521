//! Rules that pick uniformly from a subset of empty squares.

use super::pick;
use crate::{Board, Position};
use rand::RngCore;

/// A random empty corner.
pub fn random_corner(board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
    pick(&board.empty_corners(), rng)
}

/// A random empty edge.
pub fn random_edge(board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
    pick(&board.empty_edges(), rng)
}

/// A random empty square.
pub fn random(board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
    pick(&board.empty_squares(), rng)
}
