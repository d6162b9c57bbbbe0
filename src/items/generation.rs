use super::names::LootNamer;
use super::types::{Armor, ProcKind, Weapon};
use crate::core::constants::*;
use rand::Rng;

/// Generates the post-battle weapon reward for `level` (levels start at 1).
///
/// Attack modifier is drawn from `[10, 10 + 20 * level)` and the proc chance
/// from `[0, 0.15)`; a non-zero chance gets Stun or Freeze with equal odds.
pub fn generate_weapon<N: LootNamer, R: Rng>(level: u32, namer: &N, rng: &mut R) -> Weapon {
    let level = level.max(1);
    let attack = rng
        .gen_range(WEAPON_ATTACK_BASE..WEAPON_ATTACK_BASE + WEAPON_ATTACK_SPAN_PER_LEVEL * level);
    let chance = rng.gen_range(0.0..WEAPON_MAX_PROC_CHANCE);
    let kind = if chance > 0.0 {
        if rng.gen_bool(0.5) {
            ProcKind::Stun
        } else {
            ProcKind::Freeze
        }
    } else {
        ProcKind::None
    };
    let name = namer.weapon_name(rng);
    Weapon::with_proc(name, attack, chance, kind)
}

/// Generates the post-battle armor reward; defense is drawn from `[5, 5 + 10 * level)`.
pub fn generate_armor<N: LootNamer, R: Rng>(level: u32, namer: &N, rng: &mut R) -> Armor {
    let level = level.max(1);
    let defense = rng
        .gen_range(ARMOR_DEFENSE_BASE..ARMOR_DEFENSE_BASE + ARMOR_DEFENSE_SPAN_PER_LEVEL * level);
    let name = namer.armor_name(rng);
    Armor::new(name, defense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::names::WordListNamer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weapon_attack_range_scales_with_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for level in 1..=14 {
            for _ in 0..50 {
                let weapon = generate_weapon(level, &WordListNamer, &mut rng);
                assert!(weapon.attack_modifier() >= 10);
                assert!(weapon.attack_modifier() < 10 + 20 * level);
            }
        }
    }

    #[test]
    fn test_weapon_proc_below_cap_and_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..200 {
            let weapon = generate_weapon(5, &WordListNamer, &mut rng);
            assert!(weapon.proc_chance() < 0.15);
            assert_eq!(
                weapon.proc_kind() == ProcKind::None,
                weapon.proc_chance() == 0.0
            );
        }
    }

    #[test]
    fn test_weapon_proc_kinds_both_appear() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let kinds: Vec<ProcKind> = (0..200)
            .map(|_| generate_weapon(3, &WordListNamer, &mut rng).proc_kind())
            .collect();
        assert!(kinds.contains(&ProcKind::Stun));
        assert!(kinds.contains(&ProcKind::Freeze));
    }

    #[test]
    fn test_armor_defense_range_scales_with_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        for level in 1..=14 {
            for _ in 0..50 {
                let armor = generate_armor(level, &WordListNamer, &mut rng);
                assert!(armor.defense_modifier() >= 5);
                assert!(armor.defense_modifier() < 5 + 10 * level);
            }
        }
    }

    #[test]
    fn test_level_zero_treated_as_level_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let weapon = generate_weapon(0, &WordListNamer, &mut rng);
        assert!(weapon.attack_modifier() < 30);
        let armor = generate_armor(0, &WordListNamer, &mut rng);
        assert!(armor.defense_modifier() < 15);
    }

    #[test]
    fn test_same_seed_same_loot() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            generate_weapon(7, &WordListNamer, &mut a),
            generate_weapon(7, &WordListNamer, &mut b)
        );
        assert_eq!(
            generate_armor(7, &WordListNamer, &mut a),
            generate_armor(7, &WordListNamer, &mut b)
        );
    }
}
