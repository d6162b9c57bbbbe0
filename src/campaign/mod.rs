//! Campaign: level scaling, trivia, and the run loop.

pub mod encounters;
pub mod run;
pub mod trivia;

pub use encounters::{monster_count, monster_group};
pub use run::{apply_trivia, run_campaign, DefeatCause, RunOutcome, RunReport};
pub use trivia::{question_for_level, Trivia, TriviaQuestion};
