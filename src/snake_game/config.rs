use std::{fmt, fs, path::Path, time::Duration};
use serde::{Serialize, Deserialize};

use super::grid::{Grid, GridPoint};
use super::snake::Snake;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    GridTooSmall { grid: Grid, snake_length: usize },
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config: {e}"),
            ConfigError::Parse(e) => write!(f, "could not parse config: {e}"),
            ConfigError::GridTooSmall { grid, snake_length } => write!(
                f,
                "a {}x{} grid cannot hold a snake of length {snake_length} with room to move",
                grid.width, grid.height
            ),
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError::Io(e) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self { ConfigError::Parse(e) }
}

/// Everything fixed at game start. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen size in pixels; the grid is derived from it.
    pub screen_width: u32,
    pub screen_height: u32,
    pub initial_snake_length: usize,
    pub tick_millis: u64,
    /// Fixed first food cell. Random when unset.
    pub initial_food: Option<GridPoint>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: Grid::SCREEN_WIDTH,
            screen_height: Grid::SCREEN_HEIGHT,
            initial_snake_length: Snake::DEFAULT_LENGTH,
            tick_millis: 200,
            initial_food: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn grid(&self) -> Grid {
        Grid::from_screen(self.screen_width, self.screen_height)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// The start row must exist and leave one free cell ahead of the head.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid();
        let snake_length = self.initial_snake_length;
        let fits = snake_length >= 1
            && grid.height > Snake::START_ROW
            && (grid.width as usize) > snake_length;
        if !fits {
            return Err(ConfigError::GridTooSmall { grid, snake_length });
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }
}
