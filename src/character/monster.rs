use super::archetype::{SpecialMove, MONSTER_SPECIAL};
use super::combatant::{Combatant, Fighter};
use crate::core::constants::{
    MONSTER_DEFENSE_BONUS, MONSTER_RAGE_HP_FRACTION, MONSTER_SPECIAL_COOLDOWN,
};
use serde::{Deserialize, Serialize};

/// What a monster does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterMove {
    Special,
    Defend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    combatant: Combatant,
}

impl Monster {
    /// Creates a monster with the fixed +20 defense and a 3-turn special cooldown.
    pub fn new(name: impl Into<String>, max_hp: u32, base_attack: u32) -> Self {
        Self {
            combatant: Combatant::new(
                name,
                max_hp,
                base_attack,
                MONSTER_DEFENSE_BONUS,
                MONSTER_SPECIAL_COOLDOWN,
            ),
        }
    }

    /// Rage while the special is ready and health is above half; otherwise brace.
    pub fn choose_move(&self) -> MonsterMove {
        let c = &self.combatant;
        let healthy = c.current_hp() as f64 > c.max_hp() as f64 * MONSTER_RAGE_HP_FRACTION;
        if c.special_ready() && healthy {
            MonsterMove::Special
        } else {
            MonsterMove::Defend
        }
    }
}

impl Fighter for Monster {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    fn total_defense(&self) -> u32 {
        self.combatant.base_defense()
    }

    fn attack_power(&self) -> u32 {
        self.combatant.base_attack()
    }

    fn special_move(&self) -> SpecialMove {
        MONSTER_SPECIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_profile() {
        let ghoul = Monster::new("Ghoul 1", 650, 110);
        assert_eq!(ghoul.total_defense(), 20);
        assert_eq!(ghoul.attack_power(), 110);
        assert_eq!(ghoul.combatant().special_cooldown_period(), 3);
    }

    #[test]
    fn test_monster_rages_when_ready_and_healthy() {
        let ghoul = Monster::new("Ghoul 1", 600, 100);
        assert_eq!(ghoul.choose_move(), MonsterMove::Special);
    }

    #[test]
    fn test_monster_defends_at_half_health() {
        let mut ghoul = Monster::new("Ghoul 1", 600, 100);
        ghoul.combatant_mut().set_health(300);
        assert_eq!(ghoul.choose_move(), MonsterMove::Defend);
        ghoul.combatant_mut().set_health(301);
        assert_eq!(ghoul.choose_move(), MonsterMove::Special);
    }

    #[test]
    fn test_monster_defends_on_cooldown() {
        let mut ghoul = Monster::new("Ghoul 1", 600, 100);
        ghoul.combatant_mut().start_special_cooldown();
        assert_eq!(ghoul.choose_move(), MonsterMove::Defend);
    }
}
