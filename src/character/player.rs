use super::archetype::{Archetype, SpecialMove};
use super::combatant::{Combatant, Fighter};
use crate::items::{Armor, Weapon};
use serde::{Deserialize, Serialize};

/// The hero: a combatant built from an archetype, carrying one weapon and one armor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    archetype: Archetype,
    combatant: Combatant,
    weapon: Weapon,
    armor: Armor,
}

impl Player {
    /// Creates a hero at full health, unarmed and in plain clothes.
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let profile = archetype.profile();
        Self {
            archetype,
            combatant: Combatant::new(
                name,
                profile.max_hp,
                profile.attack,
                profile.defense,
                profile.special.cooldown,
            ),
            weapon: Weapon::unarmed(),
            armor: Armor::unarmored(),
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn armor(&self) -> &Armor {
        &self.armor
    }

    /// Swaps in a new weapon, returning the old one.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        std::mem::replace(&mut self.weapon, weapon)
    }

    /// Swaps in new armor, returning the old one. Stats are replaced, never merged.
    pub fn equip_armor(&mut self, armor: Armor) -> Armor {
        std::mem::replace(&mut self.armor, armor)
    }
}

impl Fighter for Player {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    fn total_defense(&self) -> u32 {
        self.combatant.base_defense() + self.armor.defense_modifier()
    }

    fn attack_power(&self) -> u32 {
        self.combatant.base_attack() + self.weapon.attack_modifier()
    }

    fn special_move(&self) -> SpecialMove {
        self.archetype.profile().special
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_uses_archetype_table() {
        let mage = Player::new("Ivy", Archetype::Mage);
        assert_eq!(mage.name(), "Ivy");
        assert_eq!(mage.combatant().max_hp(), 900);
        assert_eq!(mage.combatant().current_hp(), 900);
        assert_eq!(mage.attack_power(), 250);
        assert_eq!(mage.total_defense(), 0);
        assert_eq!(mage.combatant().special_cooldown_period(), 3);
        assert_eq!(mage.weapon().name(), "Fists");
        assert_eq!(mage.armor().name(), "Clothes");
    }

    #[test]
    fn test_equipment_feeds_attack_and_defense() {
        let mut knight = Player::new("Bors", Archetype::Knight);
        knight.equip_weapon(Weapon::new("Iron Blade", 40));
        knight.equip_armor(Armor::new("Steel Mail", 15));
        assert_eq!(knight.attack_power(), 190);
        assert_eq!(knight.total_defense(), 65);
    }

    #[test]
    fn test_equip_replaces_and_returns_old() {
        let mut archer = Player::new("Wren", Archetype::Archer);
        let old = archer.equip_weapon(Weapon::new("Sharp Cutter", 20));
        assert_eq!(old, Weapon::unarmed());
        let old = archer.equip_weapon(Weapon::new("Holy Katana", 5));
        assert_eq!(old.attack_modifier(), 20);
        assert_eq!(archer.attack_power(), 205);
    }
}
