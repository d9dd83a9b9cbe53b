//! Trainer configuration, loaded from TOML.
//!
//! ```toml
//! min_distance = 3
//! max_tries = 200
//! undo_on_reclick = true
//! fallback_start = "b1"
//! fallback_target = "c5"
//! seed = 1234
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;
use crate::path::shortest_knight_path;
use crate::task::{DEFAULT_FALLBACK, DEFAULT_MAX_TRIES, MAX_KNIGHT_DISTANCE, MIN_FALLBACK_DISTANCE};
use crate::types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Minimum optimal distance for generated tasks
    pub min_distance: u32,
    /// Random pairs tried before falling back
    pub max_tries: u32,
    /// Clicking the previous square on the route steps back instead of moving
    pub undo_on_reclick: bool,
    pub fallback_start: Square,
    pub fallback_target: Square,
    /// Fixed RNG seed for reproducible task sequences
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            min_distance: 2,
            max_tries: DEFAULT_MAX_TRIES,
            undo_on_reclick: true,
            fallback_start: DEFAULT_FALLBACK.0,
            fallback_target: DEFAULT_FALLBACK.1,
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, TrainerError> {
        let config: TrainerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TrainerError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject fallback pairs closer than two moves and minimums no pair
    /// on the board can satisfy.
    pub fn validate(&self) -> Result<(), TrainerError> {
        if self.fallback_start == self.fallback_target {
            return Err(TrainerError::InvalidConfig(
                "fallback_start and fallback_target must differ",
            ));
        }
        let fallback = shortest_knight_path(self.fallback_start, self.fallback_target);
        if fallback.distance.is_none_or(|d| d < MIN_FALLBACK_DISTANCE) {
            return Err(TrainerError::InvalidConfig(
                "fallback pair must be at least 2 moves apart",
            ));
        }
        if self.min_distance > MAX_KNIGHT_DISTANCE {
            return Err(TrainerError::InvalidConfig(
                "min_distance exceeds the longest knight route (6 moves)",
            ));
        }
        Ok(())
    }

    pub fn fallback(&self) -> (Square, Square) {
        (self.fallback_start, self.fallback_target)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
