//! Deterministic tactical rules.

use super::random_corner;
use crate::{Board, Position, Side};
use rand::RngCore;

/// First two moves only: the center if free, else a random empty corner.
pub fn first_move(move_count: usize, board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
    if move_count > 1 {
        return None;
    }
    center(board).or_else(|| random_corner(board, rng))
}

/// The center, if empty.
pub fn center(board: &Board) -> Option<Position> {
    board
        .is_available(Position::MiddleCenter)
        .then_some(Position::MiddleCenter)
}

/// The first square completing a line for `side`.
pub fn win(board: &Board, side: Side) -> Option<Position> {
    board.winning_squares(side).first().copied()
}

/// The first square completing a line for the opponent.
pub fn block(board: &Board, side: Side) -> Option<Position> {
    win(board, side.opponent())
}

/// First empty square of the first line without opponent marks.
pub fn create_fork(board: &Board, side: Side) -> Option<Position> {
    let opponent = side.opponent();
    board
        .lines()
        .iter()
        .find(|line| line.count_of(opponent) == 0 && line.empty_count() > 0)
        .and_then(|line| line.first_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(crosses: &[Position], noughts: &[Position]) -> Board {
        let mut board = Board::new();
        for p in crosses {
            board.place(*p, Side::Cross).unwrap();
        }
        for p in noughts {
            board.place(*p, Side::Nought).unwrap();
        }
        board
    }

    #[test]
    fn test_first_move_takes_center_on_empty_board() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            first_move(0, &Board::new(), &mut rng),
            Some(Position::MiddleCenter)
        );
    }

    #[test]
    fn test_first_move_answers_center_with_corner() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = board_with(&[Position::MiddleCenter], &[]);
        let pos = first_move(1, &board, &mut rng).unwrap();
        assert!(pos.is_corner());
    }

    #[test]
    fn test_first_move_inactive_later() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(first_move(2, &Board::new(), &mut rng), None);
    }

    #[test]
    fn test_center() {
        assert_eq!(center(&Board::new()), Some(Position::MiddleCenter));
        let board = board_with(&[], &[Position::MiddleCenter]);
        assert_eq!(center(&board), None);
    }

    #[test]
    fn test_win_completes_top_row() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], &[]);
        assert_eq!(win(&board, Side::Cross), Some(Position::TopRight));
        assert_eq!(win(&board, Side::Nought), None);
    }

    #[test]
    fn test_win_takes_last_cell_of_own_line() {
        let board = board_with(
            &[Position::BottomLeft, Position::BottomRight],
            &[Position::TopLeft, Position::MiddleCenter],
        );
        assert_eq!(win(&board, Side::Cross), Some(Position::BottomCenter));
    }

    #[test]
    fn test_block_opponent_threat() {
        let board = board_with(
            &[Position::TopLeft, Position::MiddleLeft],
            &[Position::MiddleCenter],
        );
        assert_eq!(block(&board, Side::Nought), Some(Position::BottomLeft));
        assert_eq!(block(&board, Side::Cross), None);
    }

    #[test]
    fn test_create_fork_skips_contested_lines() {
        // Top row and left column hold an O; middle row is the first clean line.
        let board = board_with(&[Position::MiddleCenter], &[Position::TopLeft]);
        assert_eq!(create_fork(&board, Side::Cross), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_create_fork_declines_when_every_line_contested() {
        // X O X / O X O / O X O: every line holds an O and is full or contested.
        let board = board_with(
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleCenter,
                Position::BottomCenter,
            ],
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );
        assert_eq!(create_fork(&board, Side::Cross), None);
    }
}
