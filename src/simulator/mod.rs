//! Headless balance simulator.
//!
//! Plays thousands of complete campaigns with a scripted policy to compare
//! win rates, where runs die, and how long battles last for each archetype.
//! Runs use the same `run_campaign` loop as the terminal game.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{decide, wants_loot, Autopilot};
pub use config::SimConfig;
pub use report::{ArchetypeSummary, SimReport, SimRun};
pub use runner::{run_simulation, simulate_single_run};
