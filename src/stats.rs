//! In-memory win/loss bookkeeping for finished games.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tictactoe_engine::{Game, State};
use tracing::{debug, instrument};

/// Game outcome from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Nobody won.
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished game for the player called `name`.
    ///
    /// Returns `None` while the game is still running.
    pub fn for_player(game: &Game, name: &str) -> Option<Self> {
        match game.state() {
            State::Draw => Some(Self::Draw),
            State::Win => game.winner().map(|winner| {
                if winner.name() == name {
                    Self::Win
                } else {
                    Self::Loss
                }
            }),
            State::NotStarted | State::Running => None,
        }
    }
}

/// Running totals for one named player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct Statistic {
    name: String,
    #[new(default)]
    games: u32,
    #[new(default)]
    wins: u32,
    #[new(default)]
    losses: u32,
}

impl Statistic {
    /// Games that ended without a winner.
    pub fn draws(&self) -> u32 {
        self.games
            .saturating_sub(self.wins)
            .saturating_sub(self.losses)
    }

    /// Fraction of games won, in `0.0..=1.0`.
    pub fn win_percentage(&self) -> f64 {
        if self.games == 0 || self.wins == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }

    /// Adds one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => {}
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:>5} {:>5} {:>6} {:>5} {:>6.1}%",
            self.name,
            self.games,
            self.wins,
            self.losses,
            self.draws(),
            self.win_percentage() * 100.0
        )
    }
}

/// Statistics for every player seen so far, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<Statistic>,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game for both participants.
    ///
    /// Running games are ignored.
    #[instrument(skip(self, game), fields(state = %game.state()))]
    pub fn record(&mut self, game: &Game) {
        for player in [game.player1(), game.player2()] {
            if let Some(outcome) = GameOutcome::for_player(game, player.name()) {
                debug!(name = player.name(), ?outcome, "Recording outcome");
                self.entry(player.name()).record(outcome);
            }
        }
    }

    /// Statistic for `name`, if that player has finished a game.
    pub fn get(&self, name: &str) -> Option<&Statistic> {
        self.entries.iter().find(|s| s.name() == name)
    }

    /// All statistics, in first-seen order.
    pub fn entries(&self) -> &[Statistic] {
        &self.entries
    }

    fn entry(&mut self, name: &str) -> &mut Statistic {
        let index = match self.entries.iter().position(|s| s.name() == name) {
            Some(index) => index,
            None => {
                self.entries.push(Statistic::new(name.to_string()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>5} {:>5} {:>6} {:>5} {:>7}",
            "Name", "Games", "Wins", "Losses", "Draws", "Win %"
        )?;
        for statistic in &self.entries {
            writeln!(f, "{statistic}")?;
        }
        Ok(())
    }
}
