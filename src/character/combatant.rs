//! State and rules shared by every fighter: health, statuses, cooldowns.

use super::archetype::SpecialMove;
use crate::core::constants::{DEFEND_DAMAGE_FACTOR, HEAL_COOLDOWN, HEAL_FRACTION, MIN_DAMAGE};
use serde::{Deserialize, Serialize};

/// Result of resolving one hit against a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health was reduced by `amount` (always at least 1).
    Dealt { amount: u32, remaining_hp: u32 },
    /// The hit landed during an invulnerable window.
    Absorbed,
    /// The combatant was already at 0 HP; nothing changed.
    AlreadyDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealOutcome {
    /// `amount` is the health actually restored after capping at max HP.
    Healed { amount: u32, hp: u32 },
    OnCooldown { remaining: u32 },
}

/// Combat state common to players and monsters.
///
/// Health is kept private so `0 <= current_hp <= max_hp` holds after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    current_hp: u32,
    max_hp: u32,
    base_attack: u32,
    base_defense: u32,
    is_defending: bool,
    is_invulnerable: bool,
    special_cooldown: u32,
    heal_cooldown: u32,
    special_cooldown_period: u32,
}

impl Combatant {
    /// Creates a combatant at full health with no statuses or cooldowns.
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        base_attack: u32,
        base_defense: u32,
        special_cooldown_period: u32,
    ) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            current_hp: max_hp,
            max_hp,
            base_attack,
            base_defense,
            is_defending: false,
            is_invulnerable: false,
            special_cooldown: 0,
            heal_cooldown: 0,
            special_cooldown_period: special_cooldown_period.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> u32 {
        self.base_defense
    }

    pub fn is_defending(&self) -> bool {
        self.is_defending
    }

    pub fn is_invulnerable(&self) -> bool {
        self.is_invulnerable
    }

    pub fn special_cooldown(&self) -> u32 {
        self.special_cooldown
    }

    pub fn heal_cooldown(&self) -> u32 {
        self.heal_cooldown
    }

    pub fn special_cooldown_period(&self) -> u32 {
        self.special_cooldown_period
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    pub fn special_ready(&self) -> bool {
        self.special_cooldown == 0
    }

    /// Sets health, clamped to `0..=max_hp`.
    pub fn set_health(&mut self, hp: u32) {
        self.current_hp = hp.min(self.max_hp);
    }

    /// Restores health without touching statuses or cooldowns. Returns the amount gained.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.set_health(before.saturating_add(amount));
        self.current_hp - before
    }

    /// Removes health directly, bypassing defense and invulnerability.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = before.saturating_sub(amount);
        before - self.current_hp
    }

    /// Raises max HP and current HP by the same amount.
    pub fn grow_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_add(amount);
        self.set_health(self.current_hp.saturating_add(amount));
    }

    pub fn raise_base_defense(&mut self, amount: u32) -> u32 {
        self.base_defense = self.base_defense.saturating_add(amount);
        self.base_defense
    }

    /// Resolves one hit of `raw` damage against `defense`.
    ///
    /// Defending halves the raw amount (floored) before defense is subtracted,
    /// and every landed hit deals at least [`MIN_DAMAGE`].
    pub fn take_damage(&mut self, raw: u32, defense: u32) -> DamageOutcome {
        if self.is_defeated() {
            return DamageOutcome::AlreadyDefeated;
        }
        if self.is_invulnerable {
            return DamageOutcome::Absorbed;
        }
        let factor = if self.is_defending {
            DEFEND_DAMAGE_FACTOR
        } else {
            1.0
        };
        let scaled = (raw as f64 * factor).floor() as u32;
        let amount = scaled.saturating_sub(defense).max(MIN_DAMAGE);
        self.current_hp = self.current_hp.saturating_sub(amount);
        DamageOutcome::Dealt {
            amount,
            remaining_hp: self.current_hp,
        }
    }

    /// Heals 15% of max HP and grants invulnerability until this combatant's
    /// next `end_turn`. Blocked while the heal cooldown is running.
    pub fn heal(&mut self) -> HealOutcome {
        if self.heal_cooldown > 0 {
            return HealOutcome::OnCooldown {
                remaining: self.heal_cooldown,
            };
        }
        let amount = (self.max_hp as f64 * HEAL_FRACTION).floor() as u32;
        let restored = self.restore(amount);
        self.is_invulnerable = true;
        self.heal_cooldown = HEAL_COOLDOWN;
        HealOutcome::Healed {
            amount: restored,
            hp: self.current_hp,
        }
    }

    pub fn defend(&mut self) {
        self.is_defending = true;
    }

    /// Puts the special move on its full cooldown.
    pub fn start_special_cooldown(&mut self) {
        self.special_cooldown = self.special_cooldown_period;
    }

    /// Pushes the special move further away (stun/freeze). Returns the new cooldown.
    pub fn extend_special_cooldown(&mut self, turns: u32) -> u32 {
        self.special_cooldown = self.special_cooldown.saturating_add(turns);
        self.special_cooldown
    }

    /// Clears one-turn statuses and ticks both cooldowns down, never below zero.
    pub fn end_turn(&mut self) {
        self.is_defending = false;
        self.is_invulnerable = false;
        self.special_cooldown = self.special_cooldown.saturating_sub(1);
        self.heal_cooldown = self.heal_cooldown.saturating_sub(1);
    }
}

/// Anything that can stand in a battle.
///
/// Implementors supply their gear-dependent numbers; the shared rules live on
/// [`Combatant`].
pub trait Fighter {
    fn combatant(&self) -> &Combatant;
    fn combatant_mut(&mut self) -> &mut Combatant;

    /// Defense subtracted from every incoming hit.
    fn total_defense(&self) -> u32;

    /// Damage of a basic attack before the target's defense.
    fn attack_power(&self) -> u32;

    fn special_move(&self) -> SpecialMove;

    fn name(&self) -> &str {
        self.combatant().name()
    }

    fn is_defeated(&self) -> bool {
        self.combatant().is_defeated()
    }

    fn take_damage(&mut self, raw: u32) -> DamageOutcome {
        let defense = self.total_defense();
        self.combatant_mut().take_damage(raw, defense)
    }

    fn heal(&mut self) -> HealOutcome {
        self.combatant_mut().heal()
    }

    fn defend(&mut self) {
        self.combatant_mut().defend();
    }

    fn end_turn(&mut self) {
        self.combatant_mut().end_turn();
    }
}
