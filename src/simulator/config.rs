//! Simulation configuration.

use crate::character::Archetype;
use crate::core::constants::MAX_LEVELS;
use serde::{Deserialize, Serialize};

/// Configuration for a batch of simulated campaigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Campaigns played per archetype
    pub runs: u32,

    /// Base seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Archetypes to simulate, in report order
    pub archetypes: Vec<Archetype>,

    /// Levels per campaign, boss included
    pub max_levels: u32,

    /// Probability of answering a trivia question correctly
    pub trivia_accuracy: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 200,
            seed: None,
            archetypes: Archetype::ALL.to_vec(),
            max_levels: MAX_LEVELS,
            trivia_accuracy: 0.5,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing one archetype against the default campaign.
    pub fn single_class(archetype: Archetype, runs: u32) -> Self {
        Self {
            runs,
            archetypes: vec![archetype],
            ..Default::default()
        }
    }

    /// Seed for run `run` of `archetype`; stable for a given base seed.
    pub fn run_seed(base: u64, archetype: Archetype, run: u32) -> u64 {
        base.wrapping_add(((archetype as u64) << 32) | u64::from(run))
    }
}
