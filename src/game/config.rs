use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use super::state::Coordinate;

/// Largest accepted grid side; free-cell scans and redraws are O(grid_size²)
pub const MAX_GRID_SIZE: i32 = 256;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Milliseconds between ticks, consumed by the driver only
    pub refresh_rate_ms: u64,
    /// Where the snake's head starts; the body trails to its left
    pub start_head: Coordinate,
    pub head_tag: String,
    pub body_tag: String,
    pub apple_tag: String,
    /// Ignore moves that would turn the snake straight back onto itself
    pub block_reversal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            refresh_rate_ms: 500,
            start_head: Coordinate::new(5, 5),
            head_tag: "yellow".to_string(),
            body_tag: "green".to_string(),
            apple_tag: "./game-assets/apple.png".to_string(),
            block_reversal: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the starting snake cannot fit into
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.grid_size > 0, "grid_size must be positive, got {}", self.grid_size);
        anyhow::ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid_size must be at most {}, got {}",
            MAX_GRID_SIZE,
            self.grid_size
        );
        anyhow::ensure!(self.refresh_rate_ms > 0, "refresh_rate_ms must be positive");

        let head = self.start_head;
        let tail = head.moved_by(-2, 0);
        anyhow::ensure!(
            head.is_within(self.grid_size) && tail.is_within(self.grid_size),
            "starting snake at ({}, {}) does not fit a {}x{} grid",
            head.x,
            head.y,
            self.grid_size,
            self.grid_size
        );
        Ok(())
    }
}
