//! One encounter: the hero against one to three monsters, resolved round by round.
//!
//! Each round the player acts first against the first monster still standing,
//! then every living monster acts in creation order. A round that ends with
//! every monster down skips the player's end-of-turn bookkeeping; statuses and
//! cooldowns from that round carry over into the next battle.

use super::actions::PlayerAction;
use super::moves::{apply_weapon_proc, basic_attack, defend, heal, resolve_special};
use crate::character::{Fighter, Monster, MonsterMove, Player};
use crate::core::error::Result;
use crate::core::events::GameEvent;
use crate::core::frontend::{DecisionRequest, EventSink, PlayerInput};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    player: Player,
    monsters: Vec<Monster>,
    state: BattleState,
    round: u32,
}

impl Battle {
    /// Takes ownership of the fighters for the duration of the encounter.
    pub fn new(player: Player, monsters: Vec<Monster>) -> Self {
        let state = if player.is_defeated() {
            BattleState::Lost
        } else if monsters.iter().all(|m| m.is_defeated()) {
            BattleState::Won
        } else {
            BattleState::InProgress
        };
        Self {
            player,
            monsters,
            state,
            round: 0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Rounds resolved so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Monsters still standing, in creation order.
    pub fn live_monsters(&self) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| !m.is_defeated()).collect()
    }

    /// Index of the monster the player's next action lands on.
    pub fn target_index(&self) -> Option<usize> {
        self.monsters.iter().position(|m| !m.is_defeated())
    }

    /// Hands the hero back once the encounter is over.
    pub fn into_player(self) -> Player {
        self.player
    }

    /// Plays one full round with the player's chosen action.
    ///
    /// Does nothing once the battle has reached `Won` or `Lost`.
    pub fn resolve_round<R: Rng>(&mut self, action: PlayerAction, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state != BattleState::InProgress {
            return events;
        }
        let Some(target_index) = self.target_index() else {
            return self.finish(BattleState::Won, events);
        };

        self.round += 1;
        let round = self.round;
        events.push(turn_started(round, &self.player));

        // Player turn
        let player = &mut self.player;
        let target = &mut self.monsters[target_index];
        match action {
            PlayerAction::Attack => {
                events.extend(basic_attack(&*player, player.weapon().name(), &mut *target))
            }
            PlayerAction::Heal => events.push(heal(&mut *player)),
            PlayerAction::Defend => events.push(defend(&mut *player)),
            PlayerAction::Special => events.extend(resolve_special(&mut *player, &mut *target)),
        }
        if let Some(event) = apply_weapon_proc(player.weapon(), &mut *target, rng) {
            events.push(event);
        }
        if target.is_defeated() {
            events.push(GameEvent::MonsterDefeated {
                name: target.name().to_string(),
            });
        }
        if self.player.is_defeated() {
            return self.finish(BattleState::Lost, events);
        }

        // Monster turns
        let mut player_fell = false;
        for monster in self.monsters.iter_mut() {
            if monster.is_defeated() {
                continue;
            }
            events.push(turn_started(round, &*monster));
            match monster.choose_move() {
                MonsterMove::Special => {
                    events.extend(resolve_special(&mut *monster, &mut self.player))
                }
                MonsterMove::Defend => events.push(defend(&mut *monster)),
            }
            monster.end_turn();
            if self.player.is_defeated() {
                player_fell = true;
                break;
            }
        }
        if player_fell {
            return self.finish(BattleState::Lost, events);
        }

        if self.monsters.iter().all(|m| m.is_defeated()) {
            return self.finish(BattleState::Won, events);
        }

        self.player.end_turn();
        debug!(
            round,
            ?action,
            player_hp = self.player.combatant().current_hp(),
            live_monsters = self.live_monsters().len(),
            "round resolved"
        );
        events
    }

    fn finish(&mut self, state: BattleState, mut events: Vec<GameEvent>) -> Vec<GameEvent> {
        self.state = state;
        let rounds = self.round;
        match state {
            BattleState::Won => events.push(GameEvent::BattleWon { rounds }),
            BattleState::Lost => events.push(GameEvent::BattleLost { rounds }),
            BattleState::InProgress => {}
        }
        debug!(?state, rounds, "battle finished");
        events
    }
}

fn turn_started<F: Fighter + ?Sized>(round: u32, fighter: &F) -> GameEvent {
    GameEvent::TurnStarted {
        round,
        actor: fighter.name().to_string(),
        hp: fighter.combatant().current_hp(),
        max_hp: fighter.combatant().max_hp(),
    }
}

/// Drives a battle to `Won` or `Lost`, asking `frontend` for each player
/// action and forwarding every event to it.
///
/// Recoverable input errors become a basic attack; anything else aborts.
pub fn run_battle<F, R>(battle: &mut Battle, frontend: &mut F, rng: &mut R) -> Result<BattleState>
where
    F: PlayerInput + EventSink + ?Sized,
    R: Rng,
{
    let names = battle
        .monsters()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    frontend.emit(&GameEvent::BattleStarted { monsters: names });

    while battle.state() == BattleState::InProgress {
        let action = request_action(battle, frontend)?;
        for event in battle.resolve_round(action, rng) {
            frontend.emit(&event);
        }
    }
    Ok(battle.state())
}

fn request_action<F>(battle: &Battle, frontend: &mut F) -> Result<PlayerAction>
where
    F: PlayerInput + EventSink + ?Sized,
{
    let live = battle.live_monsters();
    let Some(target) = live.first().copied() else {
        return Ok(PlayerAction::Attack);
    };
    let request = DecisionRequest {
        round: battle.round() + 1,
        player: battle.player(),
        target,
        live_monsters: &live,
    };
    match frontend.choose_action(&request) {
        Ok(action) => Ok(action),
        Err(err) if err.is_recoverable() => {
            warn!(%err, "unusable battle input, attacking instead");
            frontend.emit(&GameEvent::InputDefaulted {
                reason: err.to_string(),
            });
            Ok(PlayerAction::Attack)
        }
        Err(err) => Err(err),
    }
}
