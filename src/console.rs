//! Text rendering of boards and move lists.

use tictactoe_engine::{Board, Game, Position, Square, State};

/// Renders the board as a labelled grid.
///
/// ```text
///   1 2 3
/// A X _ _
/// B _ O _
/// C _ _ _
/// ```
pub fn render_grid(board: &Board) -> String {
    let mut out = String::from("  1 2 3");
    for (row, letter) in ['A', 'B', 'C'].into_iter().enumerate() {
        out.push('\n');
        out.push(letter);
        for column in 0..3 {
            out.push(' ');
            let symbol = Position::from_row_column(row, column)
                .map(|position| match board.value_at(position) {
                    Square::Empty => '_',
                    Square::Occupied(side) => side.symbol(),
                })
                .unwrap_or('?');
            out.push(symbol);
        }
    }
    out
}

/// One line per move: `1. X to B2  (Boris selects MiddleCenter)`.
pub fn move_lines(game: &Game) -> Vec<String> {
    game.moves_with_players()
        .enumerate()
        .map(|(i, (player, position))| {
            format!(
                "{}. {} to {}  ({} selects {})",
                i + 1,
                player.side().symbol(),
                position.coordinate(),
                player.name(),
                position
            )
        })
        .collect()
}

/// Closing message for a finished game, `None` while it is running.
pub fn result_message(game: &Game) -> Option<String> {
    match game.state() {
        State::Draw => Some("Draw!".to_string()),
        State::Win => game
            .winner()
            .map(|winner| format!("{} won, saying '{}'", winner.name(), winner.celebration())),
        State::NotStarted | State::Running => None,
    }
}

/// Heading naming both players.
pub fn matchup(game: &Game) -> String {
    format!(
        "{} (X) vs {} (O)",
        game.player1().name(),
        game.player2().name()
    )
}

/// Full frame: heading, grid, then the move list.
pub fn render_frame(game: &Game) -> String {
    let mut out = matchup(game);
    out.push_str("\n\n");
    out.push_str(&render_grid(game.board()));
    out.push('\n');
    for line in move_lines(game) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Persona, Player, Side};

    #[test]
    fn test_empty_grid() {
        assert_eq!(
            render_grid(&Board::new()),
            "  1 2 3\nA _ _ _\nB _ _ _\nC _ _ _"
        );
    }

    #[test]
    fn test_grid_shows_marks() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Cross).unwrap();
        board.place(Position::BottomRight, Side::Nought).unwrap();
        assert_eq!(render_grid(&board), "  1 2 3\nA X _ _\nB _ _ _\nC _ _ O");
    }

    #[test]
    fn test_move_lines_and_result() {
        let boris = Player::computer(Persona::Boris, Side::Cross);
        let tipsy = Player::computer(Persona::Tipsy, Side::Nought);
        let mut game = Game::new(boris.clone(), tipsy.clone()).unwrap();
        game.make_move(&boris, Position::MiddleCenter).unwrap();
        game.make_move(&tipsy, Position::TopLeft).unwrap();

        let lines = move_lines(&game);
        assert_eq!(lines[0], "1. X to B2  (Boris selects MiddleCenter)");
        assert_eq!(lines[1], "2. O to A1  (Tipsy selects TopLeft)");
        assert_eq!(result_message(&game), None);

        for (player, position) in [
            (&boris, Position::TopRight),
            (&tipsy, Position::MiddleLeft),
            (&boris, Position::BottomLeft),
        ] {
            game.make_move(player, position).unwrap();
        }
        assert_eq!(
            result_message(&game).as_deref(),
            Some("Boris won, saying 'Patience wins the day!'")
        );
    }

    #[test]
    fn test_frame_has_heading_and_grid() {
        let x = Player::human(Side::Cross);
        let o = Player::computer(Persona::SimaYi, Side::Nought);
        let game = Game::new(x, o).unwrap();
        let frame = render_frame(&game);
        assert!(frame.starts_with("You (X) vs Sima Yi (O)"));
        assert!(frame.contains("A _ _ _"));
    }
}
