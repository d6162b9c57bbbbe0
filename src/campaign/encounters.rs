use crate::character::Monster;
use crate::core::constants::*;

/// Number of monsters on a regular level.
pub fn monster_count(level: u32) -> u32 {
    if level < LEVEL_TWO_MONSTERS_FROM {
        1
    } else if level < LEVEL_THREE_MONSTERS_FROM {
        2
    } else {
        3
    }
}

/// Builds the monster group for `level`. The last level is always the lone boss.
pub fn monster_group(level: u32, max_levels: u32) -> Vec<Monster> {
    if level >= max_levels {
        return vec![Monster::new(BOSS_NAME, BOSS_HP, BOSS_ATTACK)];
    }
    let hp = MONSTER_BASE_HP + MONSTER_HP_PER_LEVEL * level;
    let attack = MONSTER_BASE_ATTACK + MONSTER_ATTACK_PER_LEVEL * level;
    (1..=monster_count(level))
        .map(|i| Monster::new(format!("{} {}", MONSTER_NAME, i), hp, attack))
        .collect()
}
