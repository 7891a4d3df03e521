//! Runner configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the console runner, loadable from TOML.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Pause between computer moves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// Number of games `watch` plays.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for the random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Redraw the board in place instead of scrolling.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_games() -> u32 {
    1
}

fn default_clear_screen() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            games: default_games(),
            seed: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl RunnerConfig {
    /// Configuration for scripted runs: no pauses, no screen control.
    pub fn quiet() -> Self {
        Self {
            delay_ms: 0,
            clear_screen: false,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(games = config.games, delay_ms = config.delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        games: Option<u32>,
        delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        if let Some(delay_ms) = delay_ms {
            self.delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
