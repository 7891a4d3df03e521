//! Lines: the eight triples of cells that can be claimed to win.

use crate::{Cell, Position, Side, Square};

/// Every line in fixed order: three rows, three columns, two diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::MiddleCenter,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::MiddleCenter,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [
        Position::TopLeft,
        Position::MiddleCenter,
        Position::BottomRight,
    ],
    [
        Position::TopRight,
        Position::MiddleCenter,
        Position::BottomLeft,
    ],
];

pub(crate) const ROWS: usize = 0;
pub(crate) const COLUMNS: usize = 3;
pub(crate) const MAIN_DIAGONAL: usize = 6;
pub(crate) const ANTI_DIAGONAL: usize = 7;

/// A view over three cells of a board.
///
/// Lines borrow the board's cell array, so they always reflect the
/// current board and never hold copies of cell state.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    cells: &'a [Cell; 9],
    positions: [Position; 3],
}

impl<'a> Line<'a> {
    pub(crate) fn new(cells: &'a [Cell; 9], positions: [Position; 3]) -> Self {
        Self { cells, positions }
    }

    /// Positions covered by this line, in order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Cells covered by this line, in order.
    pub fn cells(&self) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let cells = self.cells;
        self.positions
            .into_iter()
            .map(move |p| &cells[p.to_index()])
    }

    /// Squares covered by this line, in order.
    pub fn squares(&self) -> [Square; 3] {
        self.positions.map(|p| self.cells[p.to_index()].square())
    }

    /// Whether this line covers `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares().iter().filter(|s| s.is_empty()).count()
    }

    /// Number of cells holding `side`.
    pub fn count_of(&self, side: Side) -> usize {
        self.squares().iter().filter(|s| s.is(side)).count()
    }

    /// First empty cell's position, if any.
    pub fn first_empty(&self) -> Option<Position> {
        self.cells().find(|c| c.square().is_empty()).map(Cell::position)
    }

    /// No empty cells.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// All three cells hold the same value.
    pub fn is_uniform(&self) -> bool {
        let [a, b, c] = self.squares();
        a == b && b == c
    }

    /// Full and uniform: three in a row.
    pub fn is_win(&self) -> bool {
        self.is_full() && self.is_uniform()
    }

    /// The side holding this line, if it is a win.
    pub fn winner(&self) -> Option<Side> {
        if self.is_win() {
            self.squares()[0].side()
        } else {
            None
        }
    }

    /// One move from a win for `side`: one empty cell, two of `side`.
    pub fn is_winnable(&self, side: Side) -> bool {
        self.empty_count() == 1 && self.count_of(side) == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_lines_have_three_distinct_positions() {
        for line in LINES {
            assert_ne!(line[0], line[1]);
            assert_ne!(line[1], line[2]);
            assert_ne!(line[0], line[2]);
        }
    }

    #[test]
    fn test_empty_line_is_uniform_but_not_win() {
        let board = Board::new();
        let line = board.lines()[0];
        assert!(line.is_uniform());
        assert!(!line.is_full());
        assert!(!line.is_win());
        assert_eq!(line.first_empty(), Some(Position::TopLeft));
    }

    #[test]
    fn test_winnable_and_win() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Cross).unwrap();
        board.place(Position::TopCenter, Side::Cross).unwrap();
        {
            let top = board.lines()[0];
            assert!(top.is_winnable(Side::Cross));
            assert!(!top.is_winnable(Side::Nought));
            assert_eq!(top.first_empty(), Some(Position::TopRight));
        }

        board.place(Position::TopRight, Side::Cross).unwrap();
        let top = board.lines()[0];
        assert!(top.is_win());
        assert_eq!(top.winner(), Some(Side::Cross));
        assert!(!top.is_winnable(Side::Cross));
    }

    #[test]
    fn test_blocked_line_is_not_winnable() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Cross).unwrap();
        board.place(Position::TopCenter, Side::Nought).unwrap();
        let top = board.lines()[0];
        assert!(!top.is_winnable(Side::Cross));
        assert!(!top.is_uniform());
        assert_eq!(top.count_of(Side::Nought), 1);
        assert_eq!(top.empty_count(), 1);
    }
}
