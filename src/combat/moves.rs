//! Resolution of individual combat moves.
//!
//! Each function mutates the fighters involved and returns the events it
//! produced, in order.

use crate::character::{DamageOutcome, Fighter, HealOutcome, SpecialEffect};
use crate::core::events::GameEvent;
use crate::items::Weapon;
use rand::Rng;

/// Resolves one hit of `raw` damage against `target`.
pub fn strike<T: Fighter + ?Sized>(
    raw: u32,
    target: &mut T,
    events: &mut Vec<GameEvent>,
) -> DamageOutcome {
    let outcome = target.take_damage(raw);
    match outcome {
        DamageOutcome::Dealt {
            amount,
            remaining_hp,
        } => events.push(GameEvent::DamageApplied {
            target: target.name().to_string(),
            amount,
            remaining_hp,
        }),
        DamageOutcome::Absorbed => events.push(GameEvent::DamageAbsorbed {
            target: target.name().to_string(),
        }),
        DamageOutcome::AlreadyDefeated => {}
    }
    outcome
}

/// Basic attack: `attack_power()` against the target's defense.
pub fn basic_attack<A, T>(attacker: &A, with: &str, target: &mut T) -> Vec<GameEvent>
where
    A: Fighter + ?Sized,
    T: Fighter + ?Sized,
{
    let mut events = vec![GameEvent::Attacked {
        actor: attacker.name().to_string(),
        target: target.name().to_string(),
        with: with.to_string(),
    }];
    strike(attacker.attack_power(), target, &mut events);
    events
}

pub fn heal<A: Fighter + ?Sized>(actor: &mut A) -> GameEvent {
    match actor.heal() {
        HealOutcome::Healed { amount, hp } => GameEvent::Healed {
            actor: actor.name().to_string(),
            amount,
            hp,
        },
        HealOutcome::OnCooldown { remaining } => GameEvent::HealBlocked {
            actor: actor.name().to_string(),
            remaining,
        },
    }
}

pub fn defend<A: Fighter + ?Sized>(actor: &mut A) -> GameEvent {
    actor.defend();
    GameEvent::Defending {
        actor: actor.name().to_string(),
    }
}

/// Resolves the attacker's special move against `target`.
///
/// Blocked (no effect, cooldown untouched) while the special cooldown is
/// running; on use the cooldown restarts at the attacker's full period.
pub fn resolve_special<A, T>(attacker: &mut A, target: &mut T) -> Vec<GameEvent>
where
    A: Fighter + ?Sized,
    T: Fighter + ?Sized,
{
    let remaining = attacker.combatant().special_cooldown();
    if remaining > 0 {
        return vec![GameEvent::SpecialBlocked {
            actor: attacker.name().to_string(),
            remaining,
        }];
    }

    let special = attacker.special_move();
    let mut events = vec![GameEvent::SpecialUsed {
        actor: attacker.name().to_string(),
        name: special.name,
        target: target.name().to_string(),
    }];

    match special.effect {
        SpecialEffect::Strike { multiplier, hits } => {
            let raw = (attacker.attack_power() as f64 * multiplier).floor() as u32;
            for _ in 0..hits {
                if target.is_defeated() {
                    break;
                }
                strike(raw, target, &mut events);
            }
        }
        SpecialEffect::Fortify { defense_gain } => {
            events.push(heal(&mut *attacker));
            let base_defense = attacker.combatant_mut().raise_base_defense(defense_gain);
            events.push(GameEvent::DefenseRaised {
                actor: attacker.name().to_string(),
                base_defense,
            });
        }
    }

    attacker.combatant_mut().start_special_cooldown();
    events
}

/// Rolls the weapon's proc against a standing target.
///
/// On success the target's special cooldown grows by its period plus one.
pub fn apply_weapon_proc<T, R>(weapon: &Weapon, target: &mut T, rng: &mut R) -> Option<GameEvent>
where
    T: Fighter + ?Sized,
    R: Rng,
{
    if target.is_defeated() {
        return None;
    }
    let status = weapon.roll_proc(rng)?;
    let period = target.combatant().special_cooldown_period();
    let special_cooldown = target.combatant_mut().extend_special_cooldown(period + 1);
    Some(GameEvent::StatusApplied {
        target: target.name().to_string(),
        status,
        special_cooldown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Archetype, Monster, Player};
    use crate::items::ProcKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_basic_attack_events() {
        let knight = Player::new("Bors", Archetype::Knight);
        let mut ghoul = Monster::new("Ghoul 1", 500, 100);
        let events = basic_attack(&knight, "Fists", &mut ghoul);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GameEvent::DamageApplied {
                target: "Ghoul 1".to_string(),
                amount: 130,
                remaining_hp: 370
            }
        );
    }

    #[test]
    fn test_special_strike_multiplier() {
        let mut assassin = Player::new("Nyx", Archetype::Assassin);
        let mut ghoul = Monster::new("Ghoul 1", 2000, 100);
        resolve_special(&mut assassin, &mut ghoul);
        // 280 * 3.0 - 20
        assert_eq!(ghoul.combatant().current_hp(), 2000 - 820);
        assert_eq!(assassin.combatant().special_cooldown(), 2);
    }

    #[test]
    fn test_archer_hits_twice() {
        let mut archer = Player::new("Wren", Archetype::Archer);
        let mut ghoul = Monster::new("Ghoul 1", 2000, 100);
        let events = resolve_special(&mut archer, &mut ghoul);
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::DamageApplied { .. }))
            .count();
        assert_eq!(hits, 2);
        // 2 * (floor(200 * 0.8) - 20)
        assert_eq!(ghoul.combatant().current_hp(), 2000 - 280);
    }

    #[test]
    fn test_archer_second_arrow_skipped_on_kill() {
        let mut archer = Player::new("Wren", Archetype::Archer);
        let mut ghoul = Monster::new("Ghoul 1", 100, 100);
        let events = resolve_special(&mut archer, &mut ghoul);
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::DamageApplied { .. }))
            .count();
        assert_eq!(hits, 1);
        assert!(ghoul.is_defeated());
    }

    #[test]
    fn test_special_blocked_leaves_cooldown() {
        let mut mage = Player::new("Ivy", Archetype::Mage);
        let mut ghoul = Monster::new("Ghoul 1", 5000, 100);
        resolve_special(&mut mage, &mut ghoul);
        let hp = ghoul.combatant().current_hp();
        let events = resolve_special(&mut mage, &mut ghoul);
        assert_eq!(
            events,
            vec![GameEvent::SpecialBlocked {
                actor: "Ivy".to_string(),
                remaining: 3
            }]
        );
        assert_eq!(ghoul.combatant().current_hp(), hp);
        assert_eq!(mage.combatant().special_cooldown(), 3);
    }

    #[test]
    fn test_monster_rage_hits_player() {
        let mut ghoul = Monster::new("Ghoul 1", 600, 100);
        let mut mage = Player::new("Ivy", Archetype::Mage);
        resolve_special(&mut ghoul, &mut mage);
        assert_eq!(mage.combatant().current_hp(), 900 - 180);
    }

    #[test]
    fn test_proc_extends_cooldown_by_period_plus_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hammer = Weapon::with_proc("Hammer", 0, 1.0, ProcKind::Freeze);
        let mut ghoul = Monster::new("Ghoul 1", 600, 100);
        let event = apply_weapon_proc(&hammer, &mut ghoul, &mut rng);
        assert_eq!(
            event,
            Some(GameEvent::StatusApplied {
                target: "Ghoul 1".to_string(),
                status: ProcKind::Freeze,
                special_cooldown: 4
            })
        );
    }

    #[test]
    fn test_proc_skips_defeated_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hammer = Weapon::with_proc("Hammer", 0, 1.0, ProcKind::Stun);
        let mut ghoul = Monster::new("Ghoul 1", 600, 100);
        ghoul.combatant_mut().set_health(0);
        assert!(apply_weapon_proc(&hammer, &mut ghoul, &mut rng).is_none());
        assert_eq!(ghoul.combatant().special_cooldown(), 0);
    }
}
