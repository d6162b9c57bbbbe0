//! The campaign: a fixed sequence of levels, each a battle followed by
//! loot offers and a trivia question.

use super::encounters::monster_group;
use super::trivia::Trivia;
use crate::character::{Archetype, Fighter, Player};
use crate::combat::{run_battle, Battle, BattleState};
use crate::core::config::GameConfig;
use crate::core::constants::{ARMOR_EQUIP_HP_BONUS, TRIVIA_PENALTY_HP, TRIVIA_REWARD_HP};
use crate::core::error::Result;
use crate::core::events::GameEvent;
use crate::core::frontend::{EventSink, LootOffer, PlayerInput};
use crate::items::{generate_armor, generate_weapon, Armor, LootNamer, Weapon};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Why a run ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatCause {
    /// The hero fell in battle.
    Battle,
    /// A wrong trivia answer took the last of the hero's health.
    TriviaPenalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat { level: u32, cause: DefeatCause },
}

/// Summary of one finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub hero: String,
    pub archetype: Archetype,
    pub outcome: RunOutcome,
    pub levels_cleared: u32,
    pub final_hp: u32,
    pub weapon: Weapon,
    pub armor: Armor,
    /// Rounds played in each battle, in level order.
    pub battle_rounds: Vec<u32>,
    /// Unix timestamp (seconds) when the run began.
    pub started_at: i64,
    pub elapsed_ms: i64,
}

impl RunReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == RunOutcome::Victory
    }

    /// Level where the run ended, if it was lost.
    pub fn defeat_level(&self) -> Option<u32> {
        match self.outcome {
            RunOutcome::Victory => None,
            RunOutcome::Defeat { level, .. } => Some(level),
        }
    }
}

/// Plays a full campaign with `player`, returning once it is won or lost.
///
/// Errors from the frontend that are not recoverable abort the run.
pub fn run_campaign<F, N, R>(
    player: Player,
    config: &GameConfig,
    frontend: &mut F,
    namer: &N,
    rng: &mut R,
) -> Result<RunReport>
where
    F: PlayerInput + EventSink + Trivia + ?Sized,
    N: LootNamer,
    R: Rng,
{
    let started = Utc::now();
    let max_levels = config.max_levels.max(1);
    let mut player = player;
    let mut battle_rounds = Vec::new();
    let mut outcome = RunOutcome::Victory;
    let mut levels_cleared = 0;

    info!(
        hero = player.name(),
        archetype = player.archetype().name(),
        max_levels,
        "run started"
    );
    frontend.emit(&GameEvent::RunStarted {
        hero: player.name().to_string(),
        archetype: player.archetype(),
        max_levels,
    });

    for level in 1..=max_levels {
        info!(level, "entering level");
        frontend.emit(&GameEvent::LevelEntered {
            level,
            max_levels,
            is_final: level == max_levels,
        });

        let mut battle = Battle::new(player, monster_group(level, max_levels));
        let state = run_battle(&mut battle, frontend, rng)?;
        battle_rounds.push(battle.round());
        player = battle.into_player();

        if state == BattleState::Lost {
            outcome = RunOutcome::Defeat {
                level,
                cause: DefeatCause::Battle,
            };
            break;
        }
        levels_cleared = level;

        if level == max_levels {
            break;
        }

        offer_weapon(&mut player, level, frontend, namer, rng)?;
        offer_armor(&mut player, level, frontend, namer, rng)?;

        let correct = frontend.quiz(level)?;
        frontend.emit(&apply_trivia(&mut player, level, correct));
        if player.is_defeated() {
            outcome = RunOutcome::Defeat {
                level,
                cause: DefeatCause::TriviaPenalty,
            };
            break;
        }
    }

    let elapsed_ms = (Utc::now() - started).num_milliseconds();
    match outcome {
        RunOutcome::Victory => {
            info!(elapsed_ms, "crown recovered");
            frontend.emit(&GameEvent::RunWon { elapsed_ms });
        }
        RunOutcome::Defeat { level, cause } => {
            info!(level, ?cause, "run lost");
            frontend.emit(&GameEvent::RunLost { level, cause });
        }
    }

    Ok(RunReport {
        hero: player.name().to_string(),
        archetype: player.archetype(),
        outcome,
        levels_cleared,
        final_hp: player.combatant().current_hp(),
        weapon: player.weapon().clone(),
        armor: player.armor().clone(),
        battle_rounds,
        started_at: started.timestamp(),
        elapsed_ms,
    })
}

fn offer_weapon<F, N, R>(
    player: &mut Player,
    level: u32,
    frontend: &mut F,
    namer: &N,
    rng: &mut R,
) -> Result<()>
where
    F: PlayerInput + EventSink + ?Sized,
    N: LootNamer,
    R: Rng,
{
    let offered = generate_weapon(level, namer, rng);
    frontend.emit(&GameEvent::WeaponOffered {
        offered: offered.clone(),
        current: player.weapon().clone(),
    });
    let accepted = frontend.accept_loot(&LootOffer::Weapon {
        offered: &offered,
        current: player.weapon(),
    })?;
    debug!(weapon = offered.name(), accepted, "weapon offer");
    if accepted {
        player.equip_weapon(offered.clone());
        frontend.emit(&GameEvent::WeaponEquipped { weapon: offered });
    } else {
        frontend.emit(&GameEvent::WeaponDiscarded { weapon: offered });
    }
    Ok(())
}

fn offer_armor<F, N, R>(
    player: &mut Player,
    level: u32,
    frontend: &mut F,
    namer: &N,
    rng: &mut R,
) -> Result<()>
where
    F: PlayerInput + EventSink + ?Sized,
    N: LootNamer,
    R: Rng,
{
    let offered = generate_armor(level, namer, rng);
    frontend.emit(&GameEvent::ArmorOffered {
        offered: offered.clone(),
        current: player.armor().clone(),
    });
    let accepted = frontend.accept_loot(&LootOffer::Armor {
        offered: &offered,
        current: player.armor(),
    })?;
    debug!(armor = offered.name(), accepted, "armor offer");
    if accepted {
        player.equip_armor(offered.clone());
        player.combatant_mut().grow_max_hp(ARMOR_EQUIP_HP_BONUS);
        frontend.emit(&GameEvent::ArmorEquipped {
            armor: offered,
            max_hp: player.combatant().max_hp(),
        });
    } else {
        frontend.emit(&GameEvent::ArmorDiscarded { armor: offered });
    }
    Ok(())
}

/// Applies the fixed trivia reward or penalty. The penalty ignores
/// invulnerability and defense.
pub fn apply_trivia(player: &mut Player, level: u32, correct: bool) -> GameEvent {
    let hp_change = if correct {
        i64::from(player.combatant_mut().restore(TRIVIA_REWARD_HP))
    } else {
        -i64::from(player.combatant_mut().drain(TRIVIA_PENALTY_HP))
    };
    GameEvent::TriviaAnswered {
        level,
        correct,
        hp_change,
        hp: player.combatant().current_hp(),
    }
}
