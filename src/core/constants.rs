// Campaign shape
pub const MAX_LEVELS: u32 = 15;
pub const LEVEL_TWO_MONSTERS_FROM: u32 = 5;
pub const LEVEL_THREE_MONSTERS_FROM: u32 = 10;

// Regular encounter scaling: base + level * step
pub const MONSTER_BASE_HP: u32 = 500;
pub const MONSTER_HP_PER_LEVEL: u32 = 150;
pub const MONSTER_BASE_ATTACK: u32 = 100;
pub const MONSTER_ATTACK_PER_LEVEL: u32 = 10;
pub const MONSTER_NAME: &str = "Ghoul";

// Final level boss
pub const BOSS_NAME: &str = "King Chaus";
pub const BOSS_HP: u32 = 3500;
pub const BOSS_ATTACK: u32 = 300;

// Monster combat profile
pub const MONSTER_DEFENSE_BONUS: u32 = 20;
pub const MONSTER_SPECIAL_COOLDOWN: u32 = 3;
pub const MONSTER_SPECIAL_MULTIPLIER: f64 = 1.8;
/// Monsters only rage while strictly above this fraction of max HP.
pub const MONSTER_RAGE_HP_FRACTION: f64 = 0.5;

// Shared combat rules
pub const DEFEND_DAMAGE_FACTOR: f64 = 0.5;
pub const MIN_DAMAGE: u32 = 1;
pub const HEAL_FRACTION: f64 = 0.15;
pub const HEAL_COOLDOWN: u32 = 1;
pub const DWARF_DEFENSE_PER_SPECIAL: u32 = 50;

// Loot generation: value in [base, base + level * span)
pub const WEAPON_ATTACK_BASE: u32 = 10;
pub const WEAPON_ATTACK_SPAN_PER_LEVEL: u32 = 20;
pub const WEAPON_MAX_PROC_CHANCE: f64 = 0.15;
pub const ARMOR_DEFENSE_BASE: u32 = 5;
pub const ARMOR_DEFENSE_SPAN_PER_LEVEL: u32 = 10;
pub const ARMOR_EQUIP_HP_BONUS: u32 = 50;
pub const UNARMED_WEAPON_NAME: &str = "Fists";
pub const UNARMORED_NAME: &str = "Clothes";

// Trivia rewards
pub const TRIVIA_REWARD_HP: u32 = 100;
pub const TRIVIA_PENALTY_HP: u32 = 50;
/// Levels 1..=this have their own question; later levels use the fallback.
pub const TRIVIA_DISTINCT_LEVELS: u32 = 14;

// Hero names
pub const MAX_NAME_LENGTH: usize = 16;
