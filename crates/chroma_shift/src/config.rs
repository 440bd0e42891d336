//! Game settings loaded from TOML with command-line overrides.

use chroma_core::{
    ChromaGame, DEFAULT_BEST_TIMES_CAPACITY, DEFAULT_GRID_SIZE, DEFAULT_OBSTACLE_COUNT,
    DEFAULT_TICK, GridLayout, RandomGridGenerator,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "chroma_shift.toml";

/// User-tunable game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Side length of the grid.
    #[serde(default = "default_size")]
    size: usize,

    /// Number of obstacle cells per grid.
    #[serde(default = "default_obstacle_count")]
    obstacle_count: usize,

    /// Timer period in milliseconds; each tick adds this much play time.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// How many best times to keep.
    #[serde(default = "default_best_times_capacity")]
    best_times_capacity: usize,

    /// Fixed RNG seed for reproducible grids.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_obstacle_count() -> usize {
    DEFAULT_OBSTACLE_COUNT
}

fn default_tick_millis() -> u64 {
    DEFAULT_TICK.as_millis() as u64
}

fn default_best_times_capacity() -> usize {
    DEFAULT_BEST_TIMES_CAPACITY
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            obstacle_count: default_obstacle_count(),
            tick_millis: default_tick_millis(),
            best_times_capacity: default_best_times_capacity(),
            seed: None,
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        obstacle_count: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(obstacle_count) = obstacle_count {
            self.obstacle_count = obstacle_count;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Validated grid layout.
    pub fn layout(&self) -> Result<GridLayout, ConfigError> {
        GridLayout::new(self.size, self.obstacle_count)
            .map_err(|e| ConfigError::new(e.message))
    }

    /// Timer period, which is also the play time credited per tick.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Grid generator honouring the configured seed.
    pub fn generator(&self) -> RandomGridGenerator {
        match self.seed {
            Some(seed) => RandomGridGenerator::from_seed(seed),
            None => RandomGridGenerator::new(),
        }
    }

    /// Builds an idle game from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unplayable layout, a zero tick, or a
    /// zero best-times capacity.
    #[instrument(skip(self), fields(size = self.size, obstacles = self.obstacle_count))]
    pub fn build_game(&self) -> Result<ChromaGame, ConfigError> {
        let layout = self.layout()?;
        if self.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be positive".to_string()));
        }
        if self.best_times_capacity == 0 {
            return Err(ConfigError::new(
                "best_times_capacity must be positive".to_string(),
            ));
        }

        Ok(ChromaGame::new(layout, self.generator())
            .with_tick(self.tick())
            .with_best_times_capacity(self.best_times_capacity))
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
