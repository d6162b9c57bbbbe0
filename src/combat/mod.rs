//! Combat: player actions, move resolution, and the battle state machine.

pub mod actions;
pub mod battle;
pub mod moves;

pub use actions::PlayerAction;
pub use battle::{run_battle, Battle, BattleState};
pub use moves::{apply_weapon_proc, basic_attack, resolve_special};
