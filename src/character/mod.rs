//! Fighters: shared combat state, class table, heroes and monsters.

pub mod archetype;
pub mod combatant;
pub mod monster;
pub mod name;
pub mod player;

pub use archetype::{Archetype, ArchetypeProfile, SpecialEffect, SpecialMove, ARCHETYPES};
pub use combatant::{Combatant, DamageOutcome, Fighter, HealOutcome};
pub use monster::{Monster, MonsterMove};
pub use name::validate_name;
pub use player::Player;
