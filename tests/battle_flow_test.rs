//! Battle engine behavior through `run_battle` and `resolve_round`:
//! targeting, turn order, defaulted input, and how rounds end.

use lost_crown::character::{Archetype, Fighter, Monster, Player};
use lost_crown::combat::{run_battle, Battle, BattleState, PlayerAction};
use lost_crown::core::{DecisionRequest, EventSink, GameError, GameEvent, LootOffer, PlayerInput};
use lost_crown::items::{ProcKind, Weapon};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Plays back queued answers, then attacks forever.
#[derive(Default)]
struct Scripted {
    answers: VecDeque<Result<PlayerAction, GameError>>,
    events: Vec<GameEvent>,
    requests: Vec<(u32, String, usize)>,
}

impl Scripted {
    fn with(answers: Vec<Result<PlayerAction, GameError>>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }
}

impl PlayerInput for Scripted {
    fn choose_action(
        &mut self,
        request: &DecisionRequest<'_>,
    ) -> lost_crown::core::Result<PlayerAction> {
        self.requests.push((
            request.round,
            request.target.name().to_string(),
            request.live_monsters.len(),
        ));
        self.answers.pop_front().unwrap_or(Ok(PlayerAction::Attack))
    }

    fn accept_loot(&mut self, _offer: &LootOffer<'_>) -> lost_crown::core::Result<bool> {
        Ok(false)
    }
}

impl EventSink for Scripted {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(11)
}

fn ghouls(count: u32, hp: u32, attack: u32) -> Vec<Monster> {
    (1..=count)
        .map(|i| Monster::new(format!("Ghoul {}", i), hp, attack))
        .collect()
}

#[test]
fn test_requests_follow_rounds_and_first_live_target() {
    let hero = Player::new("Nyx", Archetype::Assassin);
    let monsters = vec![
        Monster::new("Ghoul 1", 260, 10),
        Monster::new("Ghoul 2", 5000, 10),
    ];
    let mut battle = Battle::new(hero, monsters);
    let mut ui = Scripted::with(vec![Ok(PlayerAction::Attack), Ok(PlayerAction::Defend)]);

    let state = run_battle(&mut battle, &mut ui, &mut rng()).unwrap();
    assert_eq!(state, BattleState::Won);
    assert_eq!(
        ui.requests[..2],
        [(1, "Ghoul 1".to_string(), 2), (2, "Ghoul 2".to_string(), 1)]
    );
    assert!(ui.events.contains(&GameEvent::MonsterDefeated {
        name: "Ghoul 1".into()
    }));
    assert_eq!(ui.requests.len() as u32, battle.round());
}

#[test]
fn test_bad_input_becomes_attack() {
    let hero = Player::new("Bors", Archetype::Knight);
    let mut battle = Battle::new(hero, ghouls(1, 500, 100));
    let mut ui = Scripted::with(vec![
        Err(GameError::MalformedInput("fireball".into())),
        Err(GameError::InvalidSelection("9".into())),
    ]);

    let state = run_battle(&mut battle, &mut ui, &mut rng()).unwrap();
    assert_eq!(state, BattleState::Won);
    assert_eq!(battle.round(), 4);

    let defaulted = ui
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::InputDefaulted { .. }))
        .count();
    assert_eq!(defaulted, 2);

    // A defaulted turn is still a full basic attack.
    let first_default = ui
        .events
        .iter()
        .position(|e| matches!(e, GameEvent::InputDefaulted { .. }))
        .unwrap();
    assert!(matches!(
        ui.events[first_default + 1],
        GameEvent::TurnStarted { .. }
    ));
    assert!(ui.events[first_default..].iter().any(|e| matches!(
        e,
        GameEvent::DamageApplied { amount: 130, .. }
    )));
}

#[test]
fn test_quit_aborts_battle() {
    let hero = Player::new("Bors", Archetype::Knight);
    let mut battle = Battle::new(hero, ghouls(1, 500, 100));
    let mut ui = Scripted::with(vec![Ok(PlayerAction::Attack), Err(GameError::Quit)]);

    let result = run_battle(&mut battle, &mut ui, &mut rng());
    assert!(matches!(result, Err(GameError::Quit)));
    assert_eq!(battle.round(), 1);
    assert_eq!(battle.state(), BattleState::InProgress);
}

#[test]
fn test_loss_stops_remaining_monsters() {
    let mut hero = Player::new("Ada", Archetype::Mage);
    hero.combatant_mut().set_health(10);
    let mut battle = Battle::new(hero, ghouls(3, 1000, 100));

    let events = battle.resolve_round(PlayerAction::Defend, &mut rng());
    assert_eq!(battle.state(), BattleState::Lost);
    assert_eq!(events.last(), Some(&GameEvent::BattleLost { rounds: 1 }));

    let monster_actions: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::SpecialUsed { actor, .. } | GameEvent::Defending { actor }
                if actor.starts_with("Ghoul") =>
            {
                Some(actor.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(monster_actions, vec!["Ghoul 1"]);
    // The untouched monsters keep their cooldowns.
    assert_eq!(battle.monsters()[1].combatant().special_cooldown(), 0);
}

#[test]
fn test_winning_round_skips_player_end_turn() {
    let hero = Player::new("Nyx", Archetype::Assassin);
    let mut won = Battle::new(hero.clone(), ghouls(1, 500, 100));
    won.resolve_round(PlayerAction::Special, &mut rng());
    assert_eq!(won.state(), BattleState::Won);
    assert_eq!(won.player().combatant().special_cooldown(), 2);

    let mut ongoing = Battle::new(hero, ghouls(1, 5000, 100));
    ongoing.resolve_round(PlayerAction::Special, &mut rng());
    assert_eq!(ongoing.state(), BattleState::InProgress);
    assert_eq!(ongoing.player().combatant().special_cooldown(), 1);
}

#[test]
fn test_heal_absorbs_every_monster_hit_that_round() {
    let mut hero = Player::new("Ada", Archetype::Mage);
    hero.combatant_mut().set_health(400);
    let mut battle = Battle::new(hero, ghouls(3, 5000, 100));

    let events = battle.resolve_round(PlayerAction::Heal, &mut rng());
    let absorbed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::DamageAbsorbed { target } if target == "Ada"))
        .count();
    assert_eq!(absorbed, 3);
    assert_eq!(battle.player().combatant().current_hp(), 535);
    assert!(!battle.player().combatant().is_invulnerable());
}

#[test]
fn test_heal_is_ready_again_next_round() {
    let mut hero = Player::new("Ada", Archetype::Mage);
    hero.combatant_mut().set_health(400);
    let mut battle = Battle::new(hero, ghouls(1, 5000, 1));
    let mut rng = rng();

    battle.resolve_round(PlayerAction::Heal, &mut rng);
    // Heal cooldown of 1 has already ticked away at the end of the round.
    let events = battle.resolve_round(PlayerAction::Heal, &mut rng);
    assert!(events.iter().any(|e| matches!(e, GameEvent::Healed { .. })));
}

#[test]
fn test_monster_rage_needs_more_than_half_health() {
    let hero = Player::new("Bors", Archetype::Knight);
    let mut ghoul = Monster::new("Ghoul 1", 1000, 100);
    ghoul.combatant_mut().set_health(500 + 130);
    let mut battle = Battle::new(hero, vec![ghoul]);

    // 630 - 130 leaves exactly half: the ghoul defends instead of raging.
    let events = battle.resolve_round(PlayerAction::Attack, &mut rng());
    assert!(events.contains(&GameEvent::Defending {
        actor: "Ghoul 1".into()
    }));
    assert_eq!(battle.player().combatant().current_hp(), 1200);
}

#[test]
fn test_proc_then_monster_end_turn() {
    let mut hero = Player::new("Bors", Archetype::Knight);
    hero.equip_weapon(Weapon::with_proc("Frost Brand", 0, 1.0, ProcKind::Freeze));
    let mut battle = Battle::new(hero, ghouls(1, 5000, 100));

    let events = battle.resolve_round(PlayerAction::Defend, &mut rng());
    assert!(events.contains(&GameEvent::StatusApplied {
        target: "Ghoul 1".into(),
        status: ProcKind::Freeze,
        special_cooldown: 4,
    }));
    // Frozen: the ghoul defends, then its own end of turn ticks the cooldown.
    assert!(events.contains(&GameEvent::Defending {
        actor: "Ghoul 1".into()
    }));
    assert_eq!(battle.monsters()[0].combatant().special_cooldown(), 3);
}

#[test]
fn test_run_battle_reports_start_and_end() {
    let hero = Player::new("Bors", Archetype::Knight);
    let mut battle = Battle::new(hero, ghouls(2, 300, 50));
    let mut ui = Scripted::default();

    let state = run_battle(&mut battle, &mut ui, &mut rng()).unwrap();
    assert_eq!(state, BattleState::Won);
    assert_eq!(
        ui.events.first(),
        Some(&GameEvent::BattleStarted {
            monsters: vec!["Ghoul 1".into(), "Ghoul 2".into()]
        })
    );
    assert_eq!(
        ui.events.last(),
        Some(&GameEvent::BattleWon {
            rounds: battle.round()
        })
    );
}
