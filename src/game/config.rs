use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Smallest grid edge the obstacle layouts are defined for
pub const MIN_GRID_SIZE: usize = 5;

/// Preset bundle of tick interval and obstacle layout, fixed for a whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Slow ticks, open field
    #[default]
    Easy,
    /// Medium ticks, a handful of random obstacles
    Normal,
    /// Fast ticks, striped maze
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(220),
            Self::Normal => Duration::from_millis(150),
            Self::Hard => Duration::from_millis(100),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Next preset, wrapping from Hard back to Easy
    pub fn next(&self) -> Difficulty {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Previous preset, wrapping from Easy back to Hard
    pub fn previous(&self) -> Difficulty {
        match self {
            Self::Easy => Self::Hard,
            Self::Normal => Self::Easy,
            Self::Hard => Self::Normal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{s}', expected easy, normal or hard"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Ticks a bonus stays on the board if uncollected
    pub bonus_lifetime: u32,
    /// A bonus spawns every time this many foods have been eaten
    pub bonus_every: u32,
    /// Points for ordinary food
    pub food_score: u32,
    /// Points for bonus food
    pub bonus_score: u32,
    /// Number of random obstacles placed on Normal
    pub random_obstacles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 20,
            bonus_lifetime: 50,
            bonus_every: 3,
            food_score: 1,
            bonus_score: 5,
            random_obstacles: 6,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters describe a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIZE || self.grid_height < MIN_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE}, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return Err(ConfigError::Invalid("grid dimensions are too large".to_string()));
        }

        if self.bonus_lifetime == 0 {
            return Err(ConfigError::Invalid(
                "bonus_lifetime must be at least 1".to_string(),
            ));
        }

        if self.bonus_every == 0 {
            return Err(ConfigError::Invalid(
                "bonus_every must be at least 1".to_string(),
            ));
        }

        // Interior cells minus the snake's starting cell; food and bonus need room.
        let interior = (self.grid_width - 2) * (self.grid_height - 2) - 1;
        if self.random_obstacles + 2 > interior {
            return Err(ConfigError::Invalid(format!(
                "random_obstacles ({}) leaves no room on a {}x{} grid",
                self.random_obstacles, self.grid_width, self.grid_height
            )));
        }

        Ok(())
    }
}
