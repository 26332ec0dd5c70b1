//! Game configuration: board size, computer opponent and search depth.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{DEFAULT_DIMENSION, MAX_DIMENSION, Marker, SearchConfig};
use tracing::{debug, info, instrument};

/// One of the two player markers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSide {
    /// Player X.
    #[default]
    X,
    /// Player O.
    O,
}

impl PlayerSide {
    /// Returns the board marker for this side.
    pub fn marker(self) -> Marker {
        match self {
            Self::X => Marker::X,
            Self::O => Marker::O,
        }
    }
}

/// Which marker the computer plays, if any.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComputerSide {
    /// Computer plays X.
    X,
    /// Computer plays O.
    #[default]
    O,
    /// Two humans share the keyboard.
    None,
}

impl ComputerSide {
    /// Returns the computer's marker, or `None` for human-vs-human.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Self::X => Some(Marker::X),
            Self::O => Some(Marker::O),
            Self::None => None,
        }
    }
}

/// Settings for a game session.
///
/// Every key is optional in the TOML file; missing keys take the defaults
/// (3x3 board, computer plays O, X moves first, search depth chosen from
/// the board size).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    dimension: usize,

    /// Marker played by the computer.
    computer: ComputerSide,

    /// Marker that moves first.
    first: PlayerSide,

    /// Search depth bound. `None` picks one from the board size.
    max_depth: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            computer: ComputerSide::default(),
            first: PlayerSide::default(),
            max_depth: None,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            dimension = config.dimension,
            computer = %config.computer,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::new(format!(
                "dimension must be between 1 and {}, got {}",
                MAX_DIMENSION, self.dimension
            )));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::new("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Sets the board side length.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the computer's marker.
    pub fn with_computer(mut self, computer: ComputerSide) -> Self {
        self.computer = computer;
        self
    }

    /// Sets who moves first.
    pub fn with_first(mut self, first: PlayerSide) -> Self {
        self.first = first;
        self
    }

    /// Sets the search depth bound.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Search settings for this configuration.
    pub fn search_config(&self) -> SearchConfig {
        match self.max_depth {
            Some(depth) => SearchConfig::bounded(depth),
            None => SearchConfig::for_dimension(self.dimension),
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
