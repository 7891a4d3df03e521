//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against computer personas
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against rule-based computer personas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a runner config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Watch randomly paired personas play each other
    Watch {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Pause between moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the random source (reproducible games)
        #[arg(long)]
        seed: Option<u64>,

        /// Print one JSON record per finished game instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Play against a persona from the terminal
    Play {
        /// Opponent name: Tipsy, Genghis, Boris or "Sima Yi"
        #[arg(default_value = "Tipsy")]
        opponent: String,

        /// Seed for the random source (reproducible games)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the personas and their rule chains
    Personas,
}
