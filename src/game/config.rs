use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::food::FoodPolicy;
use super::state::Board;

/// Reasons a configuration cannot describe a playable board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("block size must be positive, got {0}")]
    NonPositiveBlockSize(i32),
    #[error("board {axis} {extent} is not a positive multiple of block size {block_size}")]
    MisalignedBoard {
        axis: &'static str,
        extent: i32,
        block_size: i32,
    },
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in board units
    pub board_width: i32,
    /// Board height in board units
    pub board_height: i32,
    /// Size of one cell; every coordinate is a multiple of it
    pub block_size: i32,
    /// Period of the simulation tick
    pub tick_interval_ms: u64,
    /// Whether food may respawn on the snake
    pub food_policy: FoodPolicy,
    /// Seed for food placement, random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 400,
            board_height: 400,
            block_size: 20,
            tick_interval_ms: 200,
            food_policy: FoodPolicy::AvoidSnake,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(board_width: i32, board_height: i32, block_size: i32) -> Self {
        Self {
            board_width,
            board_height,
            block_size,
            ..Default::default()
        }
    }

    /// 10x10 cells, handy for tests
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }

    /// Read a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size <= 0 {
            return Err(ConfigError::NonPositiveBlockSize(self.block_size));
        }
        for (axis, extent) in [("width", self.board_width), ("height", self.board_height)] {
            if extent <= 0 || extent % self.block_size != 0 {
                return Err(ConfigError::MisalignedBoard {
                    axis,
                    extent,
                    block_size: self.block_size,
                });
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height, self.block_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 400);
        assert_eq!(config.board_height, 400);
        assert_eq!(config.block_size, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.food_policy, FoodPolicy::AvoidSnake);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 160, 20);
        let board = config.board();
        assert_eq!(board.columns(), 15);
        assert_eq!(board.rows(), 8);
    }

    #[test]
    fn test_validate_rejects_bad_boards() {
        assert_eq!(
            GameConfig::new(200, 200, 0).validate(),
            Err(ConfigError::NonPositiveBlockSize(0))
        );
        assert_eq!(
            GameConfig::new(210, 200, 20).validate(),
            Err(ConfigError::MisalignedBoard {
                axis: "width",
                extent: 210,
                block_size: 20
            })
        );
        assert!(matches!(
            GameConfig::new(200, 0, 20).validate(),
            Err(ConfigError::MisalignedBoard { axis: "height", .. })
        ));

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::small()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"board_width": 200, "tick_interval_ms": 120, "food_policy": "allow_overlap"}}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_width, 200);
        assert_eq!(config.board_height, 400);
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.food_policy, FoodPolicy::AllowOverlap);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
