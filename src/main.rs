mod ui;

use clap::Parser;
use directories::ProjectDirs;
use lost_crown::build_info;
use lost_crown::campaign::{run_campaign, RunReport};
use lost_crown::core::{GameConfig, GameError};
use lost_crown::items::WordListNamer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::character_creation::create_hero;
use ui::combat_log::Tone;
use ui::narration;
use ui::terminal::TerminalFrontend;

/// The Lost Crown - a turn-based terminal combat campaign.
#[derive(Parser, Debug)]
#[command(name = "lost-crown", disable_version_flag = true)]
struct Args {
    /// Seed the game RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Levels per campaign, boss included
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    levels: Option<u32>,

    /// Print build information and exit
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let log_path = setup_logging();

    let mut config = GameConfig::default();
    if let Some(seed) = args.seed {
        config = GameConfig::seeded(seed);
    }
    if let Some(levels) = args.levels {
        config = config.with_levels(levels);
    }
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    info!(?config, log = ?log_path, "starting");

    let mut ui = TerminalFrontend::new()?;
    match play(&mut ui, &config, &mut rng) {
        Ok(()) | Err(GameError::Quit) => {}
        Err(GameError::Io(err)) => {
            error!(%err, "terminal failure");
            drop(ui);
            return Err(err);
        }
        Err(err) => error!(%err, "game aborted"),
    }
    drop(ui);
    println!("Thanks for playing The Lost Crown.");
    Ok(())
}

/// Character creation, one campaign, then the retry prompt, until the player declines.
fn play(
    ui: &mut TerminalFrontend,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
) -> lost_crown::core::Result<()> {
    let mut interrupted: Option<String> = None;
    loop {
        ui.reset();
        ui.note(narration::TITLE, Tone::Loot);
        for line in narration::WELCOME {
            ui.note(*line, Tone::Plain);
        }
        if let Some(reason) = interrupted.take() {
            ui.note(format!("The run was interrupted: {}", reason), Tone::Warning);
        }

        let hero = create_hero(ui)?;
        let outcome = run_campaign(hero, config, ui, &WordListNamer, rng);
        match after_run(&outcome) {
            NextStep::Exit => return outcome.map(|_| ()),
            NextStep::Restart => {
                if let Err(err) = &outcome {
                    error!(%err, "run aborted");
                    interrupted = Some(err.to_string());
                }
                continue;
            }
            NextStep::AskToReplay => {
                if let Ok(report) = &outcome {
                    info!(
                        levels_cleared = report.levels_cleared,
                        victory = report.is_victory(),
                        elapsed_ms = report.elapsed_ms,
                        "run finished"
                    );
                }
            }
        }

        if !ui.confirm("Start a new adventure? (Y/N)", Vec::new())? {
            return Ok(());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum NextStep {
    AskToReplay,
    Restart,
    Exit,
}

/// A finished run earns the replay prompt; a broken one goes straight back to
/// character creation; quitting or a dead terminal leaves the game.
fn after_run(outcome: &lost_crown::core::Result<RunReport>) -> NextStep {
    match outcome {
        Ok(_) => NextStep::AskToReplay,
        Err(GameError::Quit | GameError::Io(_)) => NextStep::Exit,
        Err(_) => NextStep::Restart,
    }
}

/// Sends tracing output to a log file, since ratatui owns the screen.
fn setup_logging() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "lost-crown")?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir).ok()?;
    let path = dir.join("lost-crown.log");
    let file = File::create(&path).ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lost_crown=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Some(path)
}
