//! Tic-tac-toe - console runner
//!
//! Watch computer personas play each other, or play one yourself.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use tictactoe::cli::{Cli, Command};
use tictactoe::{RunnerConfig, list_personas, play, rng_from_seed, watch};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = RunnerConfig::load(cli.config.as_deref()).context("Failed to load runner config")?;

    match cli.command {
        Command::Watch {
            games,
            delay_ms,
            seed,
            json,
        } => run_watch(config.with_overrides(games, delay_ms, seed), json),
        Command::Play { opponent, seed } => {
            run_play(&opponent, config.with_overrides(None, None, seed))
        }
        Command::Personas => list_personas(&mut io::stdout().lock()),
    }
}

/// Logs go to stderr so the board on stdout stays clean.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Watch persona-versus-persona games
#[instrument(skip(config))]
fn run_watch(config: RunnerConfig, json: bool) -> Result<()> {
    info!(games = *config.games(), "Starting watch mode");
    let mut rng = rng_from_seed(*config.seed());
    let mut out = BufWriter::new(io::stdout().lock());
    watch(&config, json, &mut rng, &mut out)?;
    Ok(())
}

/// Play against a persona from the terminal
#[instrument(skip(config))]
fn run_play(opponent: &str, config: RunnerConfig) -> Result<()> {
    info!(opponent, "Starting play mode");
    let mut rng = rng_from_seed(*config.seed());
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    play(opponent, &config, &mut rng, &mut input, &mut out)
        .with_context(|| format!("Game against {opponent} failed"))?;
    Ok(())
}
