//! Console game loops: watching personas, playing against one, listing them.

use crate::config::RunnerConfig;
use crate::console::{render_frame, result_message};
use crate::stats::Scoreboard;
use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{BufRead, Write};
use std::time::Duration;
use strum::IntoEnumIterator;
use tictactoe_engine::factory::{computer_game, user_versus_persona};
use tictactoe_engine::{EngineError, Game, GameRecord, Persona, Position};
use tracing::{debug, info, instrument, warn};

/// Seeded generator when `seed` is given, entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Resolves a persona name, ignoring case and spaces (`simayi`, `SIMA YI`).
///
/// # Errors
///
/// Returns [`EngineError::UnknownOpponent`] if no persona matches.
pub fn resolve_persona(name: &str) -> Result<Persona, EngineError> {
    let wanted = normalize(name);
    Persona::iter()
        .find(|persona| normalize(persona.name()) == wanted)
        .ok_or_else(|| EngineError::UnknownOpponent {
            name: name.to_string(),
        })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Plays `config.games()` games between random personas.
///
/// Draws every move unless `json` is set, in which case one [`GameRecord`]
/// per finished game is written as a JSON line. Returns the final scores.
#[instrument(skip(config, rng, out), fields(games = *config.games()))]
pub fn watch<W: Write>(
    config: &RunnerConfig,
    json: bool,
    rng: &mut dyn RngCore,
    out: &mut W,
) -> Result<Scoreboard> {
    let mut scoreboard = Scoreboard::new();

    for round in 1..=*config.games() {
        let mut game = computer_game(rng)?;
        info!(round, cross = game.player1().name(), nought = game.player2().name(), "Watching game");

        while game.is_running() {
            if !json {
                draw(config, &game, out)?;
                pause(config);
            }
            let player = game.turn().clone();
            let position = player.select_move(game.move_count(), game.board(), rng)?;
            game.make_move(&player, position)?;
        }

        if json {
            let record = GameRecord::from(&game);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            draw(config, &game, out)?;
            finish(&game, out)?;
        }
        scoreboard.record(&game);
    }

    if !json {
        writeln!(out)?;
        write!(out, "{scoreboard}")?;
    }
    out.flush()?;
    Ok(scoreboard)
}

/// Plays one game between the human on `input` and the named persona.
///
/// Sides are assigned by coin flip. Unparseable or occupied squares are
/// re-prompted. Returns the finished game.
#[instrument(skip(config, rng, input, out))]
pub fn play<R: BufRead, W: Write>(
    opponent: &str,
    config: &RunnerConfig,
    rng: &mut dyn RngCore,
    input: &mut R,
    out: &mut W,
) -> Result<Game> {
    let persona = resolve_persona(opponent)?;
    let user_game = user_versus_persona(persona, rng)?;
    let mut game = user_game.game;
    let human = user_game.human;
    let computer = user_game.computer;

    writeln!(
        out,
        "You play {} against {}.",
        human.side().symbol(),
        computer.name()
    )?;

    while game.is_running() {
        draw(config, &game, out)?;
        if game.turn() == &human {
            let position = prompt_move(&game, input, out)?;
            game.make_move(&human, position)?;
        } else {
            pause(config);
            let position = computer.select_move(game.move_count(), game.board(), rng)?;
            game.make_move(&computer, position)?;
        }
    }

    draw(config, &game, out)?;
    finish(&game, out)?;
    out.flush()?;
    Ok(game)
}

/// Writes every persona with its rule chain.
pub fn list_personas<W: Write>(out: &mut W) -> Result<()> {
    for persona in Persona::iter() {
        let rules: Vec<String> = persona.rules().iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{:<8} {:<24} {}",
            persona.name(),
            format!("\"{}\"", persona.celebration()),
            rules.join(" > ")
        )?;
    }
    Ok(())
}

fn prompt_move<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    out: &mut W,
) -> Result<Position> {
    loop {
        write!(out, "Your move (A1-C3, 1-9 or a name like TopLeft): ")?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read move")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }

        match Position::from_input(line.trim()) {
            Some(position) if game.board().is_available(position) => {
                debug!(%position, "Human move accepted");
                return Ok(position);
            }
            Some(position) => {
                warn!(%position, "Square already taken");
                writeln!(out, "{} is already taken.", position.coordinate())?;
            }
            None => {
                writeln!(out, "'{}' is not a square.", line.trim())?;
            }
        }
    }
}

fn draw<W: Write>(config: &RunnerConfig, game: &Game, out: &mut W) -> Result<()> {
    if *config.clear_screen() {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    } else {
        writeln!(out)?;
    }
    writeln!(out, "{}", render_frame(game))?;
    out.flush()?;
    Ok(())
}

fn finish<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    if let Some(message) = result_message(game) {
        writeln!(out)?;
        writeln!(out, "{message}")?;
    }
    Ok(())
}

fn pause(config: &RunnerConfig) {
    if *config.delay_ms() > 0 {
        std::thread::sleep(Duration::from_millis(*config.delay_ms()));
    }
}

