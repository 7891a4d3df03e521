//! The turn-taking state machine.

use crate::invariants::assert_invariants;
use crate::{Board, EngineError, Player, Position, Side, Square, State};
use tracing::{debug, info, instrument};

/// A game of tic-tac-toe between two players.
///
/// The cross player is always `player1` and moves first. Moves are
/// validated in full before the board is touched, and the history is
/// append-only.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) player1: Player,
    pub(crate) player2: Player,
    pub(crate) moves: Vec<Position>,
    pub(crate) state: State,
}

impl Game {
    /// Creates a running game.
    ///
    /// Players may be given in either order; the cross player becomes
    /// `player1`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPlayers`] if both players share a side.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, EngineError> {
        if first.side() == second.side() {
            return Err(EngineError::InvalidPlayers { side: first.side() });
        }

        let (player1, player2) = if first.side() == Side::Cross {
            (first, second)
        } else {
            (second, first)
        };

        info!(cross = %player1.name(), nought = %player2.name(), "Game started");

        Ok(Self {
            board: Board::new(),
            player1,
            player2,
            moves: Vec::new(),
            state: State::Running,
        })
    }

    /// Plays `player`'s mark at `position` and returns the mover.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotRunning`] if the game is already decided.
    /// - [`EngineError::IllegalMove`] if the square is taken.
    /// - [`EngineError::OutOfTurn`] if `player` is not [`Game::turn`].
    #[instrument(skip(self, player), fields(player = %player.name(), move_count = self.moves.len()))]
    pub fn make_move(&mut self, player: &Player, position: Position) -> Result<&Player, EngineError> {
        if self.state != State::Running {
            return Err(EngineError::NotRunning { state: self.state });
        }

        if !self.board.is_available(position) {
            return Err(EngineError::IllegalMove { position });
        }

        if player != self.turn() {
            return Err(EngineError::OutOfTurn {
                side: player.side(),
            });
        }

        let first_moved = self.moves.len() % 2 == 0;
        self.board.place(position, player.side())?;
        self.moves.push(position);

        self.state = if self.board.is_winning_move(position) {
            State::Win
        } else if self.board.is_draw() {
            State::Draw
        } else {
            State::Running
        };

        debug!(%position, state = %self.state, "Move applied");
        assert_invariants(self);

        Ok(if first_moved {
            &self.player1
        } else {
            &self.player2
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// True while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Player whose turn it is (cross after an even number of moves).
    pub fn turn(&self) -> &Player {
        if self.moves.len() % 2 == 0 {
            &self.player1
        } else {
            &self.player2
        }
    }

    /// The player who completed a line, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        if self.state != State::Win {
            return None;
        }
        Some(if self.moves.len() % 2 == 1 {
            &self.player1
        } else {
            &self.player2
        })
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Positions played, in order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Moves paired with the player who made each one.
    pub fn moves_with_players(&self) -> impl Iterator<Item = (&Player, Position)> + '_ {
        self.moves.iter().enumerate().map(|(i, pos)| {
            let player = if i % 2 == 0 {
                &self.player1
            } else {
                &self.player2
            };
            (player, *pos)
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Content of the square at `position`.
    pub fn value_at(&self, position: Position) -> Square {
        self.board.value_at(position)
    }

    /// The cross player.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// The nought player.
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Player assigned to `side`.
    pub fn player_for(&self, side: Side) -> &Player {
        match side {
            Side::Cross => &self.player1,
            Side::Nought => &self.player2,
        }
    }
}
