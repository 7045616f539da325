//! Game configuration
//!
//! Map size, sight radius, turn pacing and the viewport used for wall
//! recalculation. Every field has a default, so a config file only needs
//! to name what it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FOV_RADIUS, MAP_HEIGHT, MAP_WIDTH, TURN_INTERVAL_MS};

/// Errors from loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    pub fov_radius: u32,
    /// Minimum time between two accepted player inputs
    pub turn_interval_ms: u64,
    pub viewport_width: usize,
    pub viewport_height: usize,
    /// Extra tiles around the viewport that still get wall recalculation
    pub viewport_margin: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            fov_radius: FOV_RADIUS,
            turn_interval_ms: TURN_INTERVAL_MS,
            viewport_width: 20,
            viewport_height: 15,
            viewport_margin: 3,
        }
    }
}

impl GameConfig {
    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("map_width", self.map_width),
            ("map_height", self.map_height),
            ("fov_radius", self.fov_radius as usize),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        if i32::try_from(self.map_width).is_err() || i32::try_from(self.map_height).is_err() {
            return Err(ConfigError::Invalid {
                field: "map_width",
                reason: format!(
                    "map of {}x{} does not fit signed coordinates",
                    self.map_width, self.map_height
                ),
            });
        }
        Ok(())
    }
}
