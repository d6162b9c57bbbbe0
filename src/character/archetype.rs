//! Fixed class table: base stats and special move per archetype.

use crate::core::constants::{
    DWARF_DEFENSE_PER_SPECIAL, MONSTER_SPECIAL_COOLDOWN, MONSTER_SPECIAL_MULTIPLIER,
};
use crate::core::error::{parse_menu_choice, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    Knight,
    Mage,
    Archer,
    Assassin,
    Dwarf,
}

/// What a special move does once its cooldown allows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialEffect {
    /// `hits` separate damage resolutions of `attack_power * multiplier` (floored).
    Strike { multiplier: f64, hits: u32 },
    /// Self-heal (subject to heal cooldown) plus a permanent base defense gain.
    Fortify { defense_gain: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialMove {
    pub name: &'static str,
    pub cooldown: u32,
    pub effect: SpecialEffect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special: SpecialMove,
    /// Short description for the class menu.
    pub blurb: &'static str,
}

/// Indexed by `Archetype as usize`.
pub static ARCHETYPES: [ArchetypeProfile; 5] = [
    ArchetypeProfile {
        archetype: Archetype::Knight,
        max_hp: 1200,
        attack: 150,
        defense: 50,
        special: SpecialMove {
            name: "Shield Bash",
            cooldown: 2,
            effect: SpecialEffect::Strike {
                multiplier: 1.5,
                hits: 1,
            },
        },
        blurb: "Balanced, High Def",
    },
    ArchetypeProfile {
        archetype: Archetype::Mage,
        max_hp: 900,
        attack: 250,
        defense: 0,
        special: SpecialMove {
            name: "Fireball",
            cooldown: 3,
            effect: SpecialEffect::Strike {
                multiplier: 2.5,
                hits: 1,
            },
        },
        blurb: "High ATK, Low Def",
    },
    ArchetypeProfile {
        archetype: Archetype::Archer,
        max_hp: 1000,
        attack: 200,
        defense: 0,
        special: SpecialMove {
            name: "Barrage",
            cooldown: 3,
            effect: SpecialEffect::Strike {
                multiplier: 0.8,
                hits: 2,
            },
        },
        blurb: "Multi-hit, Balanced",
    },
    ArchetypeProfile {
        archetype: Archetype::Assassin,
        max_hp: 800,
        attack: 280,
        defense: 0,
        special: SpecialMove {
            name: "Backstab",
            cooldown: 2,
            effect: SpecialEffect::Strike {
                multiplier: 3.0,
                hits: 1,
            },
        },
        blurb: "Very High ATK, Lowest HP",
    },
    ArchetypeProfile {
        archetype: Archetype::Dwarf,
        max_hp: 1500,
        attack: 100,
        defense: 75,
        special: SpecialMove {
            name: "Stone Skin",
            cooldown: 3,
            effect: SpecialEffect::Fortify {
                defense_gain: DWARF_DEFENSE_PER_SPECIAL,
            },
        },
        blurb: "Highest HP & Def, Lowest ATK",
    },
];

pub const MONSTER_SPECIAL: SpecialMove = SpecialMove {
    name: "Monster Rage",
    cooldown: MONSTER_SPECIAL_COOLDOWN,
    effect: SpecialEffect::Strike {
        multiplier: MONSTER_SPECIAL_MULTIPLIER,
        hits: 1,
    },
};

impl Archetype {
    /// Menu order (1-based in the UI).
    pub const ALL: [Archetype; 5] = [
        Archetype::Knight,
        Archetype::Mage,
        Archetype::Archer,
        Archetype::Assassin,
        Archetype::Dwarf,
    ];

    pub fn profile(self) -> &'static ArchetypeProfile {
        &ARCHETYPES[self as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Knight => "Knight",
            Archetype::Mage => "Mage",
            Archetype::Archer => "Archer",
            Archetype::Assassin => "Assassin",
            Archetype::Dwarf => "Dwarf",
        }
    }

    /// Parses a class menu entry (`1`..=`5`).
    pub fn from_menu(input: &str) -> Result<Self> {
        let choice = parse_menu_choice(input, Self::ALL.len() as u32)?;
        Ok(Self::ALL[(choice - 1) as usize])
    }

    /// Case-insensitive lookup by class name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.name().eq_ignore_ascii_case(name.trim()))
    }
}
