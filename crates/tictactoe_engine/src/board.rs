//! The 3x3 board and its derived geometry.

use crate::line::{ANTI_DIAGONAL, COLUMNS, LINES, Line, MAIN_DIAGONAL, ROWS};
use crate::{Cell, EngineError, Position, Side, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order and only ever change from
/// empty to occupied through [`Board::place`]. Serialized as its nine
/// squares in row-major order; positions are never read from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Square; 9]", into = "[Square; 9]")]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(Cell::new),
        }
    }

    /// Gets the square at the given position.
    pub fn value_at(&self, position: Position) -> Square {
        self.cells[position.to_index()].square()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.to_index()]
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a square is empty.
    pub fn is_available(&self, position: Position) -> bool {
        self.value_at(position).is_empty()
    }

    /// Places `side`'s mark at an empty position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if the position is occupied;
    /// the board is left untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, position: Position, side: Side) -> Result<(), EngineError> {
        if !self.is_available(position) {
            return Err(EngineError::IllegalMove { position });
        }
        self.cells[position.to_index()].occupy(side);
        trace!(%position, %side, "Mark placed");
        Ok(())
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.square().is_occupied()).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }

    /// True when every square is occupied.
    ///
    /// A final move can fill the board and win at once, so check
    /// [`Board::is_winning_move`] first.
    pub fn is_draw(&self) -> bool {
        self.is_full()
    }

    /// True if any line through `position` is three in a row.
    pub fn is_winning_move(&self, position: Position) -> bool {
        self.lines_through(position).iter().any(Line::is_win)
    }

    /// Side holding any complete line.
    pub fn winner(&self) -> Option<Side> {
        self.lines().iter().find_map(Line::winner)
    }

    /// All eight lines: rows, columns, then the two diagonals.
    pub fn lines(&self) -> [Line<'_>; 8] {
        LINES.map(|positions| Line::new(&self.cells, positions))
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [Line<'_>; 3] {
        [0, 1, 2].map(|i| self.line(ROWS + i))
    }

    /// The three columns, left to right.
    pub fn columns(&self) -> [Line<'_>; 3] {
        [0, 1, 2].map(|i| self.line(COLUMNS + i))
    }

    /// Row containing `position`.
    pub fn row_of(&self, position: Position) -> Line<'_> {
        self.line(ROWS + position.row())
    }

    /// Column containing `position`.
    pub fn column_of(&self, position: Position) -> Line<'_> {
        self.line(COLUMNS + position.column())
    }

    /// Diagonals through `position`.
    ///
    /// The center lies on both; top-left and bottom-right on the main
    /// diagonal; top-right and bottom-left on the anti-diagonal; edges on
    /// neither.
    pub fn diagonals_through(&self, position: Position) -> Vec<Line<'_>> {
        match position {
            Position::MiddleCenter => {
                vec![self.line(MAIN_DIAGONAL), self.line(ANTI_DIAGONAL)]
            }
            Position::TopLeft | Position::BottomRight => vec![self.line(MAIN_DIAGONAL)],
            Position::TopRight | Position::BottomLeft => vec![self.line(ANTI_DIAGONAL)],
            _ => Vec::new(),
        }
    }

    /// Row, column, and diagonals through `position`.
    pub fn lines_through(&self, position: Position) -> Vec<Line<'_>> {
        let mut lines = vec![self.row_of(position), self.column_of(position)];
        lines.extend(self.diagonals_through(position));
        lines
    }

    /// Empty cell of every line one move from a win for `side`.
    ///
    /// Lines are scanned in fixed order, so a square shared by two
    /// threatening lines appears twice.
    #[instrument(level = "trace", skip(self))]
    pub fn winning_squares(&self, side: Side) -> Vec<Position> {
        self.lines()
            .iter()
            .filter(|line| line.is_winnable(side))
            .filter_map(Line::first_empty)
            .collect()
    }

    /// Empty squares in index order.
    pub fn empty_squares(&self) -> Vec<Position> {
        self.empty_of(&Position::ALL)
    }

    /// Empty corners: top-left, top-right, bottom-left, bottom-right.
    pub fn empty_corners(&self) -> Vec<Position> {
        self.empty_of(&Position::CORNERS)
    }

    /// Empty edges: top-center, middle-left, middle-right, bottom-center.
    pub fn empty_edges(&self) -> Vec<Position> {
        self.empty_of(&Position::EDGES)
    }

    /// Occupied squares in index order.
    pub fn occupied_squares(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|p| !self.is_available(*p))
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (i, cell) in self.cells.iter().enumerate() {
            result.push(match cell.square() {
                Square::Empty => '_',
                Square::Occupied(side) => side.symbol(),
            });
            if i % 3 == 2 {
                if i < 8 {
                    result.push('\n');
                }
            } else {
                result.push(' ');
            }
        }
        result
    }

    fn line(&self, index: usize) -> Line<'_> {
        Line::new(&self.cells, LINES[index])
    }

    fn empty_of(&self, positions: &[Position]) -> Vec<Position> {
        positions
            .iter()
            .copied()
            .filter(|p| self.is_available(*p))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; 9]> for Board {
    fn from(squares: [Square; 9]) -> Self {
        let mut board = Self::new();
        for (cell, square) in board.cells.iter_mut().zip(squares) {
            if let Square::Occupied(side) = square {
                cell.occupy(side);
            }
        }
        board
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.cells.map(|c| c.square())
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Square;

    fn index(&self, position: Position) -> &Self::Output {
        self.cells[position.to_index()].square_ref()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
