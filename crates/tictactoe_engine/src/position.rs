//! Board positions for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Row letters used by grid coordinates (`A1` is top-left).
const ROW_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    MiddleCenter,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleCenter,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Corner positions, in the order random corner selection indexes them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Edge positions, in the order random edge selection indexes them.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::MiddleCenter => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0 = left).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from a (row, column) pair.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row >= 3 || column >= 3 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Whether this position is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Whether this position is one of the four edges.
    pub fn is_edge(self) -> bool {
        Self::EDGES.contains(&self)
    }

    /// Whether this is the center square.
    pub fn is_center(self) -> bool {
        self == Position::MiddleCenter
    }

    /// Grid coordinate for this position, e.g. `B2` for the center.
    pub fn coordinate(self) -> String {
        format!("{}{}", ROW_LETTERS[self.row()], self.column() + 1)
    }

    /// Parses console input.
    ///
    /// Accepts a grid coordinate (`a1`..`c3`), a keypad digit (`1`..`9`),
    /// a label (`top-left`, `center`) or the variant name (`TopLeft`).
    #[instrument(level = "trace")]
    pub fn from_input(s: &str) -> Option<Position> {
        let trimmed = s.trim();

        if let Ok(num) = trimmed.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let mut chars = trimmed.chars();
        if let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) {
            let row = ROW_LETTERS
                .iter()
                .position(|l| l.eq_ignore_ascii_case(&letter));
            let column = digit.to_digit(10).and_then(|d| (d as usize).checked_sub(1));
            if let (Some(row), Some(column)) = (row, column) {
                return Self::from_row_column(row, column);
            }
        }

        let wanted = normalize(trimmed);
        Self::ALL.into_iter().find(|pos| {
            let name: &'static str = (*pos).into();
            normalize(pos.label()) == wanted || normalize(name) == wanted
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = (*self).into();
        write!(f, "{}", name)
    }
}
