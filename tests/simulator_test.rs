//! Headless simulator: reproducibility and report shape.

use lost_crown::character::Archetype;
use lost_crown::simulator::{run_simulation, SimConfig};

fn config(seed: u64) -> SimConfig {
    SimConfig {
        runs: 4,
        seed: Some(seed),
        archetypes: Archetype::ALL.to_vec(),
        max_levels: 5,
        trivia_accuracy: 0.7,
        verbosity: 0,
    }
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let first = run_simulation(&config(2024));
    let second = run_simulation(&config(2024));
    assert_eq!(first, second);
    assert_eq!(first.to_json(), second.to_json());
}

#[test]
fn test_report_covers_requested_classes() {
    let report = run_simulation(&config(1));
    let classes: Vec<Archetype> = report.summaries.iter().map(|s| s.archetype).collect();
    assert_eq!(classes, Archetype::ALL.to_vec());
    assert_eq!(report.total_runs(), 20);

    for summary in &report.summaries {
        assert_eq!(summary.runs, 4);
        assert!(summary.mean_levels_cleared <= 5.0);
        assert!(summary.mean_battle_rounds >= 1.0);
        let lost: u32 = summary.defeats_by_level.values().sum();
        assert_eq!(lost + summary.victories, summary.runs);
        assert!(summary.defeats_by_level.keys().all(|&l| (1..=5).contains(&l)));
    }
}

#[test]
fn test_single_class_config() {
    let mut config = SimConfig::single_class(Archetype::Dwarf, 2);
    config.seed = Some(5);
    config.max_levels = 3;
    config.verbosity = 0;
    let report = run_simulation(&config);
    assert_eq!(report.summaries.len(), 1);
    assert!(report.summary_for(Archetype::Dwarf).is_some());
    let text = report.to_text();
    assert!(text.contains("Dwarf"));
    assert!(text.contains("BALANCE ASSESSMENT"));
}
