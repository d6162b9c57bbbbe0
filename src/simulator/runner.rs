//! Main simulation runner. Each run plays the real campaign loop with an
//! [`Autopilot`] standing in for the player.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{ArchetypeSummary, SimReport, SimRun};
use crate::campaign::run_campaign;
use crate::character::{Archetype, Player};
use crate::core::config::GameConfig;
use crate::items::WordListNamer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config
        .seed
        .unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());
    let game = GameConfig {
        max_levels: config.max_levels.max(1),
        seed: config.seed,
    };

    let summaries = config
        .archetypes
        .iter()
        .map(|&archetype| {
            let runs: Vec<SimRun> = (0..config.runs)
                .filter_map(|run| {
                    let seed = SimConfig::run_seed(base_seed, archetype, run);
                    simulate_single_run(archetype, run, seed, &game, config)
                })
                .collect();
            let summary = ArchetypeSummary::from_runs(archetype, &runs);
            if config.verbosity >= 1 {
                info!(
                    archetype = archetype.name(),
                    runs = summary.runs,
                    win_rate = summary.win_rate,
                    "archetype simulated"
                );
            }
            summary
        })
        .collect();

    SimReport {
        seed: config.seed,
        max_levels: game.max_levels,
        trivia_accuracy: config.trivia_accuracy,
        summaries,
    }
}

/// Plays one seeded campaign. `None` if the run aborted.
pub fn simulate_single_run(
    archetype: Archetype,
    run: u32,
    seed: u64,
    game: &GameConfig,
    config: &SimConfig,
) -> Option<SimRun> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pilot = Autopilot::new(
        config.trivia_accuracy,
        ChaCha8Rng::seed_from_u64(rng.gen()),
    );
    let hero = Player::new(format!("{} {}", archetype.name(), run + 1), archetype);

    match run_campaign(hero, game, &mut pilot, &WordListNamer, &mut rng) {
        Ok(report) => {
            if config.verbosity >= 2 {
                debug!(
                    archetype = archetype.name(),
                    run = run + 1,
                    levels_cleared = report.levels_cleared,
                    victory = report.is_victory(),
                    "run finished"
                );
            }
            Some(SimRun {
                report,
                procs_landed: pilot.procs_landed(),
            })
        }
        Err(err) => {
            warn!(%err, archetype = archetype.name(), run, "simulated run aborted");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: u64) -> SimConfig {
        SimConfig {
            runs: 3,
            seed: Some(seed),
            archetypes: vec![Archetype::Knight, Archetype::Dwarf],
            max_levels: 4,
            trivia_accuracy: 0.5,
            verbosity: 0,
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = run_simulation(&small(9));
        let b = run_simulation(&small(9));
        // Elapsed wall-clock time is not part of the summary.
        assert_eq!(a, b);
        assert_eq!(a.summaries.len(), 2);
        assert_eq!(a.total_runs(), 6);
    }

    #[test]
    fn test_levels_cleared_within_bounds() {
        let report = run_simulation(&small(3));
        for summary in &report.summaries {
            assert!(summary.mean_levels_cleared <= 4.0);
            assert!(summary.win_rate >= 0.0 && summary.win_rate <= 1.0);
            let defeats: u32 = summary.defeats_by_level.values().sum();
            assert_eq!(defeats + summary.victories, summary.runs);
        }
    }
}
