//! The Lost Crown headless balance simulator.
//!
//! Plays complete campaigns with the autopilot policy and prints per-class
//! win rates, where runs end, and how long battles last.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]

use clap::Parser;
use lost_crown::character::Archetype;
use lost_crown::simulator::{run_simulation, SimConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Monte Carlo balance runs for The Lost Crown")]
struct Args {
    /// Campaigns per class
    #[arg(long, default_value_t = 200)]
    runs: u32,

    /// Base RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Only simulate this class (knight, mage, archer, assassin, dwarf)
    #[arg(long)]
    class: Option<String>,

    /// Levels per campaign, boss included
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    levels: u32,

    /// Probability of answering trivia correctly
    #[arg(long, default_value_t = 0.5)]
    trivia_accuracy: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every finished run
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "lost_crown=debug" } else { "lost_crown=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !(0.0..=1.0).contains(&args.trivia_accuracy) {
        eprintln!("--trivia-accuracy must be between 0 and 1");
        return ExitCode::FAILURE;
    }

    let archetypes = match &args.class {
        Some(name) => match Archetype::from_name(name) {
            Some(archetype) => vec![archetype],
            None => {
                eprintln!("Unknown class: {name}");
                return ExitCode::FAILURE;
            }
        },
        None => Archetype::ALL.to_vec(),
    };

    let config = SimConfig {
        runs: args.runs,
        seed: args.seed,
        archetypes,
        max_levels: args.levels,
        trivia_accuracy: args.trivia_accuracy,
        verbosity: if args.verbose { 2 } else { 1 },
    };

    tracing::info!(runs = config.runs, seed = ?config.seed, "simulating");
    let report = run_simulation(&config);

    if args.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}
