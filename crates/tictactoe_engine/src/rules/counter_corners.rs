//! Corner and edge balancing against corner attacks.
//!
//! This is a heuristic whose coverage of symmetric positions has never
//! been proven complete. The order of checks defines Boris's play and is
//! kept as is:
//!
//! 1. decline when no corner is empty;
//! 2. the four corner-plus-far-edge traps;
//! 3. opposite-row corners held by the opponent, none by us: an edge;
//! 4. more opponent corners on the top row: a top corner;
//! 5. more opponent corners on the bottom row: a bottom corner;
//! 6. corner counts tied: lean toward the opponent's heavier column,
//!    otherwise a random corner;
//! 7. anything else: a random edge.

use super::{random_corner, random_edge};
use crate::{Board, Position, Side};
use rand::RngCore;
use tracing::trace;

/// Opponent marks at the first two positions, target empty: take the target.
const TRAPS: [(Position, Position, Position); 4] = [
    (Position::TopLeft, Position::BottomCenter, Position::BottomLeft),
    (Position::TopRight, Position::BottomCenter, Position::BottomRight),
    (Position::BottomLeft, Position::TopCenter, Position::TopLeft),
    (Position::BottomRight, Position::TopCenter, Position::TopRight),
];

/// Counters corner attacks for `side`.
pub fn counter_corners(board: &Board, side: Side, rng: &mut dyn RngCore) -> Option<Position> {
    if board.empty_corners().is_empty() {
        return None;
    }

    let opponent = side.opponent();

    for (corner, edge, target) in TRAPS {
        if board.value_at(corner).is(opponent)
            && board.value_at(edge).is(opponent)
            && board.is_available(target)
        {
            trace!(%target, "Closing corner trap");
            return Some(target);
        }
    }

    let (my_top, my_bottom) = corner_weight(board, side);
    let (opp_top, opp_bottom) = corner_weight(board, opponent);

    if opp_top == 1 && opp_bottom == 1 && my_top == 0 && my_bottom == 0 {
        if let Some(edge) = random_edge(board, rng) {
            return Some(edge);
        }
    }

    if opp_top > my_top {
        if let Some(corner) = first_available(board, [Position::TopLeft, Position::TopRight]) {
            return Some(corner);
        }
    }

    if opp_bottom > my_bottom {
        if let Some(corner) =
            first_available(board, [Position::BottomLeft, Position::BottomRight])
        {
            return Some(corner);
        }
    }

    if opp_top == my_top && opp_bottom == my_bottom {
        let (left, right) = column_weight(board, opponent);

        if left > right {
            if let Some(corner) = first_available(board, [Position::TopLeft, Position::BottomLeft])
            {
                return Some(corner);
            }
        }

        if right > left {
            if let Some(corner) =
                first_available(board, [Position::TopRight, Position::BottomRight])
            {
                return Some(corner);
            }
        }

        return random_corner(board, rng);
    }

    random_edge(board, rng)
}

/// Corners held by `side` in the top and bottom rows.
fn corner_weight(board: &Board, side: Side) -> (usize, usize) {
    let count = |corners: [Position; 2]| {
        corners
            .into_iter()
            .filter(|p| board.value_at(*p).is(side))
            .count()
    };
    (
        count([Position::TopLeft, Position::TopRight]),
        count([Position::BottomLeft, Position::BottomRight]),
    )
}

/// Marks held by `side` in the left and right columns.
fn column_weight(board: &Board, side: Side) -> (usize, usize) {
    let [left, _, right] = board.columns();
    (left.count_of(side), right.count_of(side))
}

fn first_available(board: &Board, candidates: [Position; 2]) -> Option<Position> {
    candidates.into_iter().find(|p| board.is_available(*p))
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

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_declines_without_empty_corner() {
        let board = board_with(
            &[Position::TopLeft, Position::BottomRight],
            &[Position::TopRight, Position::BottomLeft],
        );
        assert_eq!(counter_corners(&board, Side::Nought, &mut rng()), None);
    }

    #[test]
    fn test_closes_each_trap() {
        for (corner, edge, target) in TRAPS {
            let board = board_with(&[corner, edge], &[Position::MiddleCenter]);
            assert_eq!(
                counter_corners(&board, Side::Nought, &mut rng()),
                Some(target),
                "{corner} + {edge}"
            );
        }
    }

    #[test]
    fn test_trap_order_is_fixed() {
        // Both the first and third traps apply; the first wins.
        let board = board_with(
            &[
                Position::TopLeft,
                Position::BottomCenter,
                Position::BottomRight,
                Position::TopCenter,
            ],
            &[Position::MiddleCenter, Position::MiddleLeft],
        );
        assert_eq!(
            counter_corners(&board, Side::Nought, &mut rng()),
            Some(Position::BottomLeft)
        );
    }

    #[test]
    fn test_opposite_corners_answered_with_edge() {
        let board = board_with(
            &[Position::TopLeft, Position::BottomRight],
            &[Position::MiddleCenter],
        );
        let pos = counter_corners(&board, Side::Nought, &mut rng()).unwrap();
        assert!(pos.is_edge());
    }

    #[test]
    fn test_top_corner_imbalance() {
        let board = board_with(&[Position::TopRight], &[Position::MiddleCenter]);
        assert_eq!(
            counter_corners(&board, Side::Nought, &mut rng()),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_bottom_corner_imbalance() {
        let board = board_with(&[Position::BottomLeft], &[Position::MiddleCenter]);
        assert_eq!(
            counter_corners(&board, Side::Nought, &mut rng()),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn test_tied_corners_lean_to_heavier_column() {
        let board = board_with(&[Position::MiddleRight], &[Position::MiddleCenter]);
        assert_eq!(
            counter_corners(&board, Side::Nought, &mut rng()),
            Some(Position::TopRight)
        );

        let board = board_with(&[Position::MiddleLeft], &[Position::MiddleCenter]);
        assert_eq!(
            counter_corners(&board, Side::Nought, &mut rng()),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_tied_balanced_columns_take_random_corner() {
        let board = board_with(&[Position::MiddleCenter], &[]);
        let pos = counter_corners(&board, Side::Nought, &mut rng()).unwrap();
        assert!(pos.is_corner());
    }

    #[test]
    fn test_we_lead_on_corners_falls_back_to_edge() {
        // We hold a top corner, the opponent holds none.
        let board = board_with(&[Position::MiddleCenter], &[Position::TopLeft]);
        let pos = counter_corners(&board, Side::Nought, &mut rng()).unwrap();
        assert!(pos.is_edge());
    }
}
