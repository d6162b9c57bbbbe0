//! Structured events handed to the presentation layer.
//!
//! The game logic never formats text for the screen; the terminal front end
//! and the simulator decide what to do with each event.

use crate::campaign::DefeatCause;
use crate::character::Archetype;
use crate::items::{Armor, ProcKind, Weapon};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Run ─────────────────────────────────────────────────────
    /// A new hero set out.
    RunStarted {
        hero: String,
        archetype: Archetype,
        max_levels: u32,
    },

    /// A level began; `is_final` marks the boss chamber.
    LevelEntered {
        level: u32,
        max_levels: u32,
        is_final: bool,
    },

    /// The crown was recovered.
    RunWon { elapsed_ms: i64 },

    /// The run ended on `level`.
    RunLost { level: u32, cause: DefeatCause },

    // ── Battle ──────────────────────────────────────────────────
    BattleStarted { monsters: Vec<String> },

    /// A combatant's turn began.
    TurnStarted {
        round: u32,
        actor: String,
        hp: u32,
        max_hp: u32,
    },

    /// The player's input could not be used; a basic attack was made instead.
    InputDefaulted { reason: String },

    Attacked {
        actor: String,
        target: String,
        with: String,
    },

    DamageApplied {
        target: String,
        amount: u32,
        remaining_hp: u32,
    },

    /// An invulnerable combatant shrugged off a hit.
    DamageAbsorbed { target: String },

    Healed { actor: String, amount: u32, hp: u32 },

    HealBlocked { actor: String, remaining: u32 },

    Defending { actor: String },

    SpecialUsed {
        actor: String,
        name: &'static str,
        target: String,
    },

    SpecialBlocked { actor: String, remaining: u32 },

    DefenseRaised { actor: String, base_defense: u32 },

    /// A weapon proc pushed back the target's special move.
    StatusApplied {
        target: String,
        status: ProcKind,
        special_cooldown: u32,
    },

    MonsterDefeated { name: String },

    BattleWon { rounds: u32 },

    BattleLost { rounds: u32 },

    // ── Rewards ─────────────────────────────────────────────────
    WeaponOffered { offered: Weapon, current: Weapon },

    WeaponEquipped { weapon: Weapon },

    WeaponDiscarded { weapon: Weapon },

    ArmorOffered { offered: Armor, current: Armor },

    ArmorEquipped { armor: Armor, max_hp: u32 },

    ArmorDiscarded { armor: Armor },

    /// Trivia result after the health change was applied.
    TriviaAnswered {
        level: u32,
        correct: bool,
        hp_change: i64,
        hp: u32,
    },
}
