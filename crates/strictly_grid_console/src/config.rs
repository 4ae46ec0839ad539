//! Game configuration for the console front end.
//!
//! Values are layered: TOML file, then environment, then command-line
//! flags. A missing file means defaults.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_grid::{DiagonalRule, Player};
use tracing::{debug, info, instrument};

/// Environment variable overriding the board size.
pub const SIZE_ENV: &str = "STRICTLY_GRID_SIZE";

/// A player seat declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerSeat {
    /// Display name.
    name: String,
    /// Board glyph.
    glyph: String,
}

impl PlayerSeat {
    /// Creates a new seat.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// Settings for one console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size (odd, positive). Validated when the game is set up.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Which diagonals count as winning lines.
    #[serde(default)]
    diagonal_rule: DiagonalRule,

    /// Either empty (players are prompted for) or exactly two seats.
    #[serde(default)]
    players: Vec<PlayerSeat>,
}

fn default_board_size() -> usize {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            diagonal_rule: DiagonalRule::default(),
            players: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if !config.players.is_empty() && config.players.len() != 2 {
            return Err(ConfigError::new(format!(
                "Expected 0 or 2 players, found {}",
                config.players.len()
            )));
        }

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies environment overrides, reading variables through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SIZE_ENV) {
            self.board_size = raw.trim().parse().map_err(|_| {
                ConfigError::new(format!("{} must be a number, got {:?}", SIZE_ENV, raw))
            })?;
            debug!(board_size = self.board_size, "Board size taken from environment");
        }
        Ok(self)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, size: Option<usize>, rule: Option<DiagonalRule>) -> Self {
        if let Some(size) = size {
            self.board_size = size;
        }
        if let Some(rule) = rule {
            self.diagonal_rule = rule;
        }
        self
    }

    /// Builds the configured players, if the file declared them.
    pub fn seated_players(&self) -> Result<Option<[Player; 2]>, ConfigError> {
        let [first, second] = self.players.as_slice() else {
            return Ok(None);
        };
        let build = |seat: &PlayerSeat| {
            Player::new(seat.name.as_str(), seat.glyph.as_str())
                .map_err(|e| ConfigError::new(format!("Invalid player {:?}: {}", seat.name, e)))
        };
        Ok(Some([build(first)?, build(second)?]))
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
