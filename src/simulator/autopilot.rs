//! Scripted decision policy used by the simulator.

use crate::campaign::Trivia;
use crate::character::{Archetype, Fighter};
use crate::combat::PlayerAction;
use crate::core::error::Result;
use crate::core::events::GameEvent;
use crate::core::frontend::{DecisionRequest, EventSink, LootOffer, PlayerInput};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Heal below this share of max HP (percent).
const HEAL_BELOW_PERCENT: u32 = 35;
/// Stone Skin only below this share of max HP (percent).
const FORTIFY_BELOW_PERCENT: u32 = 75;

/// Plays a campaign without a human: fixed combat policy, greedy loot,
/// and trivia answered correctly with a configured probability.
#[derive(Debug, Clone)]
pub struct Autopilot {
    trivia_accuracy: f64,
    rng: ChaCha8Rng,
    procs_landed: u32,
}

impl Autopilot {
    pub fn new(trivia_accuracy: f64, rng: ChaCha8Rng) -> Self {
        let trivia_accuracy = if trivia_accuracy.is_nan() {
            0.0
        } else {
            trivia_accuracy.clamp(0.0, 1.0)
        };
        Self {
            trivia_accuracy,
            rng,
            procs_landed: 0,
        }
    }

    /// Weapon procs that landed so far.
    pub fn procs_landed(&self) -> u32 {
        self.procs_landed
    }
}

/// The combat policy: heal when low, otherwise special when ready, otherwise attack.
pub fn decide(request: &DecisionRequest<'_>) -> PlayerAction {
    let hero = request.player.combatant();
    let hp = hero.current_hp() as u64;
    let max = hero.max_hp() as u64;
    let below = |percent: u32| hp * 100 < max * u64::from(percent);

    if below(HEAL_BELOW_PERCENT) && hero.heal_cooldown() == 0 {
        return PlayerAction::Heal;
    }
    if hero.special_ready() {
        let worth_it = match request.player.archetype() {
            Archetype::Dwarf => below(FORTIFY_BELOW_PERCENT),
            _ => true,
        };
        if worth_it {
            return PlayerAction::Special;
        }
    }
    PlayerAction::Attack
}

/// Loot policy: strictly better weapons, armor that is at least as good.
pub fn wants_loot(offer: &LootOffer<'_>) -> bool {
    match offer {
        LootOffer::Weapon { offered, current } => {
            offered.attack_modifier() > current.attack_modifier()
        }
        LootOffer::Armor { offered, current } => {
            offered.defense_modifier() >= current.defense_modifier()
        }
    }
}

impl PlayerInput for Autopilot {
    fn choose_action(&mut self, request: &DecisionRequest<'_>) -> Result<PlayerAction> {
        Ok(decide(request))
    }

    fn accept_loot(&mut self, offer: &LootOffer<'_>) -> Result<bool> {
        Ok(wants_loot(offer))
    }
}

impl EventSink for Autopilot {
    fn emit(&mut self, event: &GameEvent) {
        trace!(?event, "sim event");
        if let GameEvent::StatusApplied { .. } = event {
            self.procs_landed += 1;
        }
    }
}

impl Trivia for Autopilot {
    fn quiz(&mut self, _level: u32) -> Result<bool> {
        Ok(self.rng.gen_bool(self.trivia_accuracy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Monster, Player};
    use crate::items::{Armor, ProcKind, Weapon};
    use rand::SeedableRng;

    fn request_for<'a>(
        player: &'a Player,
        target: &'a Monster,
        live: &'a [&'a Monster],
    ) -> DecisionRequest<'a> {
        DecisionRequest {
            round: 1,
            player,
            target,
            live_monsters: live,
        }
    }

    #[test]
    fn test_heals_when_low_and_ready() {
        let mut hero = Player::new("Bot", Archetype::Mage);
        hero.combatant_mut().set_health(300);
        let ghoul = Monster::new("Ghoul 1", 650, 110);
        let live = [&ghoul];
        assert_eq!(decide(&request_for(&hero, &ghoul, &live)), PlayerAction::Heal);
    }

    #[test]
    fn test_specials_when_healthy() {
        let hero = Player::new("Bot", Archetype::Assassin);
        let ghoul = Monster::new("Ghoul 1", 650, 110);
        let live = [&ghoul];
        assert_eq!(decide(&request_for(&hero, &ghoul, &live)), PlayerAction::Special);
    }

    #[test]
    fn test_dwarf_saves_stone_skin() {
        let mut hero = Player::new("Bot", Archetype::Dwarf);
        let ghoul = Monster::new("Ghoul 1", 650, 110);
        let live = [&ghoul];
        assert_eq!(decide(&request_for(&hero, &ghoul, &live)), PlayerAction::Attack);

        hero.combatant_mut().set_health(1000);
        assert_eq!(decide(&request_for(&hero, &ghoul, &live)), PlayerAction::Special);
    }

    #[test]
    fn test_attacks_when_special_cooling_down() {
        let mut hero = Player::new("Bot", Archetype::Knight);
        hero.combatant_mut().start_special_cooldown();
        let ghoul = Monster::new("Ghoul 1", 650, 110);
        let live = [&ghoul];
        assert_eq!(decide(&request_for(&hero, &ghoul, &live)), PlayerAction::Attack);
    }

    #[test]
    fn test_loot_policy() {
        let old = Weapon::new("Old Blade", 30);
        let better = Weapon::with_proc("Keen Blade", 31, 0.1, ProcKind::Stun);
        let same = Weapon::new("Twin Blade", 30);
        assert!(wants_loot(&LootOffer::Weapon { offered: &better, current: &old }));
        assert!(!wants_loot(&LootOffer::Weapon { offered: &same, current: &old }));

        let worn = Armor::new("Worn Mail", 12);
        let equal = Armor::new("Plain Mail", 12);
        assert!(wants_loot(&LootOffer::Armor { offered: &equal, current: &worn }));
    }

    #[test]
    fn test_trivia_accuracy_extremes() {
        let mut always = Autopilot::new(1.0, ChaCha8Rng::seed_from_u64(1));
        let mut never = Autopilot::new(0.0, ChaCha8Rng::seed_from_u64(1));
        for level in 1..=14 {
            assert!(always.quiz(level).unwrap());
            assert!(!never.quiz(level).unwrap());
        }
    }

    #[test]
    fn test_counts_procs() {
        let mut pilot = Autopilot::new(0.5, ChaCha8Rng::seed_from_u64(1));
        pilot.emit(&GameEvent::StatusApplied {
            target: "Ghoul 1".into(),
            status: ProcKind::Freeze,
            special_cooldown: 4,
        });
        pilot.emit(&GameEvent::BattleWon { rounds: 2 });
        assert_eq!(pilot.procs_landed(), 1);
    }
}
