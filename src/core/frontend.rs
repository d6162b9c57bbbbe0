//! Collaborator traits between the game logic and whoever drives it.
//!
//! The terminal front end and the simulator's autopilot both implement these,
//! so the battle engine and campaign loop never know where decisions come from
//! or how events are shown.

use super::error::Result;
use super::events::GameEvent;
use crate::character::{Monster, Player};
use crate::combat::PlayerAction;
use crate::items::{Armor, Weapon};

/// Snapshot handed to the decision maker before each player turn.
#[derive(Debug, Clone, Copy)]
pub struct DecisionRequest<'a> {
    /// 1-based round about to be played.
    pub round: u32,
    pub player: &'a Player,
    /// The monster that will receive the player's action.
    pub target: &'a Monster,
    /// Every monster still standing, in creation order (`target` first).
    pub live_monsters: &'a [&'a Monster],
}

/// Loot offered after a won battle, shown next to what is equipped.
#[derive(Debug, Clone, Copy)]
pub enum LootOffer<'a> {
    Weapon {
        offered: &'a Weapon,
        current: &'a Weapon,
    },
    Armor {
        offered: &'a Armor,
        current: &'a Armor,
    },
}

/// Source of player decisions.
pub trait PlayerInput {
    /// Picks the next action. Recoverable errors make the engine fall back
    /// to a basic attack; any other error aborts the run.
    fn choose_action(&mut self, request: &DecisionRequest<'_>) -> Result<PlayerAction>;

    /// Accept (`true`) or discard (`false`) a loot offer.
    fn accept_loot(&mut self, offer: &LootOffer<'_>) -> Result<bool>;
}

/// Receiver of structured game events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
