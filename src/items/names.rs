//! Cosmetic names for generated loot.

use rand::Rng;

/// Supplies display names for generated equipment. Names never affect stats.
pub trait LootNamer {
    fn weapon_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
    fn armor_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// Prefix + base word namer backed by fixed word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListNamer;

const WEAPON_PREFIXES: &[&str] = &[
    "Rusty", "Iron", "Sharp", "Ancient", "Obsidian", "Mythic", "Vicious", "Grim", "Shadow", "Holy",
];
const WEAPON_BASES: &[&str] = &[
    "Blade", "Dagger", "Axe", "Saber", "Reaver", "Longsword", "Cutter", "Katana",
];
const ARMOR_PREFIXES: &[&str] = &[
    "Leather", "Plate", "Scaled", "Mythril", "Steel", "Draconic", "Worn", "Reinforced",
];
const ARMOR_BASES: &[&str] = &["Vest", "Cuirass", "Chestplate", "Tunic", "Mail", "Robe"];

fn pick<R: Rng + ?Sized>(words: &[&'static str], rng: &mut R) -> &'static str {
    words[rng.gen_range(0..words.len())]
}

impl LootNamer for WordListNamer {
    fn weapon_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let prefix = pick(WEAPON_PREFIXES, rng);
        let base = pick(WEAPON_BASES, rng);
        format!("{} {}", prefix, base)
    }

    fn armor_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let prefix = pick(ARMOR_PREFIXES, rng);
        let base = pick(ARMOR_BASES, rng);
        format!("{} {}", prefix, base)
    }
}
