//! Simulation report generation.

use crate::campaign::RunReport;
use crate::character::Archetype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One finished simulated campaign plus autopilot counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimRun {
    pub report: RunReport,
    pub procs_landed: u32,
}

/// Aggregated results for one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeSummary {
    pub archetype: Archetype,
    pub runs: u32,
    pub victories: u32,
    pub win_rate: f64,
    pub mean_levels_cleared: f64,
    /// Level → number of runs that ended there.
    pub defeats_by_level: BTreeMap<u32, u32>,
    pub mean_battle_rounds: f64,
    pub mean_procs_per_run: f64,
}

impl ArchetypeSummary {
    pub fn from_runs(archetype: Archetype, runs: &[SimRun]) -> Self {
        let count = runs.len() as u32;
        let divisor = f64::from(count.max(1));
        let victories = runs.iter().filter(|r| r.report.is_victory()).count() as u32;

        let mut defeats_by_level = BTreeMap::new();
        for level in runs.iter().filter_map(|r| r.report.defeat_level()) {
            *defeats_by_level.entry(level).or_insert(0) += 1;
        }

        let rounds: Vec<u32> = runs
            .iter()
            .flat_map(|r| r.report.battle_rounds.iter().copied())
            .collect();
        let mean_battle_rounds =
            rounds.iter().map(|&r| f64::from(r)).sum::<f64>() / rounds.len().max(1) as f64;

        Self {
            archetype,
            runs: count,
            victories,
            win_rate: f64::from(victories) / divisor,
            mean_levels_cleared: runs
                .iter()
                .map(|r| f64::from(r.report.levels_cleared))
                .sum::<f64>()
                / divisor,
            defeats_by_level,
            mean_battle_rounds,
            mean_procs_per_run: runs.iter().map(|r| f64::from(r.procs_landed)).sum::<f64>()
                / divisor,
        }
    }

    /// Level with the most defeats, if any run was lost.
    pub fn deadliest_level(&self) -> Option<u32> {
        self.defeats_by_level
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&level, _)| level)
    }
}

/// Aggregated results across every simulated archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub seed: Option<u64>,
    pub max_levels: u32,
    pub trivia_accuracy: f64,
    pub summaries: Vec<ArchetypeSummary>,
}

impl SimReport {
    pub fn summary_for(&self, archetype: Archetype) -> Option<&ArchetypeSummary> {
        self.summaries.iter().find(|s| s.archetype == archetype)
    }

    pub fn total_runs(&self) -> u32 {
        self.summaries.iter().map(|s| s.runs).sum()
    }

    /// Human-readable balance report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 THE LOST CROWN - BALANCE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!("  Levels:          {}\n", self.max_levels));
        report.push_str(&format!(
            "  Trivia accuracy: {:.0}%\n",
            self.trivia_accuracy * 100.0
        ));
        match self.seed {
            Some(seed) => report.push_str(&format!("  Seed:            {}\n\n", seed)),
            None => report.push_str("  Seed:            random\n\n"),
        }

        report.push_str("── PER-CLASS RESULTS ────────────────────────────────────────────\n");
        report.push_str("  Class      Runs   Wins   Win%   Levels   Rounds   Procs\n");
        report.push_str("  ─────      ────   ────   ────   ──────   ──────   ─────\n");
        for s in &self.summaries {
            report.push_str(&format!(
                "  {:<9} {:5}  {:5}  {:5.1}   {:6.2}   {:6.2}   {:5.2}\n",
                s.archetype.name(),
                s.runs,
                s.victories,
                s.win_rate * 100.0,
                s.mean_levels_cleared,
                s.mean_battle_rounds,
                s.mean_procs_per_run
            ));
        }
        report.push('\n');

        report.push_str("── DEFEATS BY LEVEL ─────────────────────────────────────────────\n");
        for s in &self.summaries {
            if s.defeats_by_level.is_empty() {
                report.push_str(&format!("  {:<9} none\n", s.archetype.name()));
                continue;
            }
            let levels: Vec<String> = s
                .defeats_by_level
                .iter()
                .map(|(level, n)| format!("L{}:{}", level, n))
                .collect();
            report.push_str(&format!("  {:<9} {}\n", s.archetype.name(), levels.join(" ")));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        for s in &self.summaries {
            let rating = if s.win_rate > 0.9 {
                "TOO EASY"
            } else if s.win_rate > 0.4 {
                "GOOD"
            } else if s.win_rate > 0.1 {
                "HARD"
            } else {
                "TOO HARD"
            };
            report.push_str(&format!("  {:<9} {}", s.archetype.name(), rating));
            if let Some(level) = s.deadliest_level() {
                report.push_str(&format!(" (most defeats at level {})", level));
            }
            report.push('\n');
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
