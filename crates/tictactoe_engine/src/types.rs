//! Core domain types for tic-tac-toe.

use crate::Position;
use serde::{Deserialize, Serialize};

/// The mark a player is permanently assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Side {
    /// Crosses (always moves first).
    Cross,
    /// Noughts (moves second).
    Nought,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Cross => Side::Nought,
            Side::Nought => Side::Cross,
        }
    }

    /// Single-character mark drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Side::Cross => 'X',
            Side::Nought => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Checks if the square holds a mark.
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(side) => Some(side),
        }
    }

    /// Checks if the square holds the given side's mark.
    pub fn is(self, side: Side) -> bool {
        self == Square::Occupied(side)
    }
}

/// A board cell: a fixed position plus its current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    position: Position,
    square: Square,
}

impl Cell {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            square: Square::Empty,
        }
    }

    /// The cell's fixed position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The cell's current content.
    pub fn square(&self) -> Square {
        self.square
    }

    pub(crate) fn square_ref(&self) -> &Square {
        &self.square
    }

    pub(crate) fn occupy(&mut self, side: Side) {
        self.square = Square::Occupied(side);
    }
}

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum State {
    /// Never observed after construction; kept for completeness.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    Running,
    /// Board filled with no winner.
    Draw,
    /// The last move completed a line.
    Win,
}

impl State {
    /// Whether no further moves are legal.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Draw | State::Win)
    }
}
