//! Run configuration shared by the terminal game and the simulator.

use super::constants::MAX_LEVELS;
use serde::{Deserialize, Serialize};

/// Configuration for a single campaign run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of levels; the last one is the boss fight
    pub max_levels: u32,

    /// Random seed for reproducible runs (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_levels: MAX_LEVELS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config with a fixed seed, everything else default.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Shorter campaign, mostly useful for tests and quick simulations.
    pub fn with_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels.max(1);
        self
    }
}
