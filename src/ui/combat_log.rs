//! Turns game events into the scrolling log shown under the status panel.

use lost_crown::core::GameEvent;
use ratatui::style::Color;
use std::collections::VecDeque;

const MAX_LINES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Hero,
    Foe,
    Loot,
    Warning,
    Victory,
    Defeat,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Plain => Color::Gray,
            Tone::Hero => Color::Cyan,
            Tone::Foe => Color::Red,
            Tone::Loot => Color::Yellow,
            Tone::Warning => Color::Magenta,
            Tone::Victory => Color::Green,
            Tone::Defeat => Color::LightRed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub tone: Tone,
}

impl LogLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Bounded log of formatted events.
#[derive(Debug, Default)]
pub struct CombatLog {
    hero: String,
    lines: VecDeque<LogLine>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &LogLine> {
        self.lines.iter()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Appends free text, e.g. narration or prompts that were answered.
    pub fn note(&mut self, text: impl Into<String>, tone: Tone) {
        if self.lines.len() == MAX_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine::new(text, tone));
    }

    pub fn record(&mut self, event: &GameEvent) {
        if let GameEvent::RunStarted { hero, .. } = event {
            self.hero = hero.clone();
        }
        if let Some(line) = self.describe(event) {
            self.note(line.text, line.tone);
        }
    }

    fn side(&self, actor: &str) -> Tone {
        if actor == self.hero {
            Tone::Hero
        } else {
            Tone::Foe
        }
    }

    /// The log line for `event`; `None` for events only the status panel uses.
    pub fn describe(&self, event: &GameEvent) -> Option<LogLine> {
        let line = match event {
            GameEvent::RunStarted {
                hero, archetype, ..
            } => LogLine::new(
                format!("{} the {} sets out to recover the crown.", hero, archetype.name()),
                Tone::Hero,
            ),
            GameEvent::LevelEntered {
                level,
                max_levels,
                is_final,
            } => {
                let suffix = if *is_final { " - the final chamber" } else { "" };
                LogLine::new(format!("== Level {}/{}{} ==", level, max_levels, suffix), Tone::Plain)
            }
            GameEvent::RunWon { .. } | GameEvent::RunLost { .. } => return None,
            GameEvent::BattleStarted { monsters } => {
                LogLine::new(format!("You face {}.", monsters.join(", ")), Tone::Foe)
            }
            GameEvent::TurnStarted { .. } => return None,
            GameEvent::InputDefaulted { reason } => {
                LogLine::new(format!("{} - you attack instead.", reason), Tone::Warning)
            }
            GameEvent::Attacked { actor, target, with } => LogLine::new(
                format!("{} attacks {} with {}.", actor, target, with),
                self.side(actor),
            ),
            GameEvent::DamageApplied {
                target,
                amount,
                remaining_hp,
            } => LogLine::new(
                format!("{} takes {} damage ({} HP left).", target, amount, remaining_hp),
                Tone::Plain,
            ),
            GameEvent::DamageAbsorbed { target } => {
                LogLine::new(format!("{} is untouchable this turn!", target), Tone::Plain)
            }
            GameEvent::Healed { actor, amount, hp } => LogLine::new(
                format!("{} heals for {} ({} HP).", actor, amount, hp),
                self.side(actor),
            ),
            GameEvent::HealBlocked { actor, remaining } => LogLine::new(
                format!("{} cannot heal yet ({} turn(s)).", actor, remaining),
                Tone::Warning,
            ),
            GameEvent::Defending { actor } => {
                LogLine::new(format!("{} braces for impact.", actor), self.side(actor))
            }
            GameEvent::SpecialUsed { actor, name, target } => LogLine::new(
                format!("{} uses {} on {}!", actor, name, target),
                self.side(actor),
            ),
            GameEvent::SpecialBlocked { actor, remaining } => LogLine::new(
                format!("{}'s special is not ready ({} turn(s)).", actor, remaining),
                Tone::Warning,
            ),
            GameEvent::DefenseRaised {
                actor,
                base_defense,
            } => LogLine::new(
                format!("{}'s defense rises to {}.", actor, base_defense),
                self.side(actor),
            ),
            GameEvent::StatusApplied {
                target,
                status,
                special_cooldown,
            } => LogLine::new(
                format!(
                    "{} is {}! Its special waits {} turn(s).",
                    target,
                    status.applied_label(),
                    special_cooldown
                ),
                Tone::Hero,
            ),
            GameEvent::MonsterDefeated { name } => {
                LogLine::new(format!("{} falls.", name), Tone::Victory)
            }
            GameEvent::BattleWon { rounds } => {
                LogLine::new(format!("Victory in {} round(s)!", rounds), Tone::Victory)
            }
            GameEvent::BattleLost { .. } => LogLine::new("You have been slain.", Tone::Defeat),
            GameEvent::WeaponOffered { offered, current } => LogLine::new(
                format!("Found {}. Equipped: {}.", offered, current),
                Tone::Loot,
            ),
            GameEvent::WeaponEquipped { weapon } => {
                LogLine::new(format!("You now wield {}.", weapon.name()), Tone::Loot)
            }
            GameEvent::WeaponDiscarded { weapon } => {
                LogLine::new(format!("You leave {} behind.", weapon.name()), Tone::Plain)
            }
            GameEvent::ArmorOffered { offered, current } => LogLine::new(
                format!("Found {}. Equipped: {}.", offered, current),
                Tone::Loot,
            ),
            GameEvent::ArmorEquipped { armor, max_hp } => LogLine::new(
                format!("You don {} (max HP {}).", armor.name(), max_hp),
                Tone::Loot,
            ),
            GameEvent::ArmorDiscarded { armor } => {
                LogLine::new(format!("You leave {} behind.", armor.name()), Tone::Plain)
            }
            GameEvent::TriviaAnswered {
                correct, hp_change, ..
            } => {
                if *correct {
                    LogLine::new(format!("Correct! +{} HP.", hp_change), Tone::Victory)
                } else {
                    LogLine::new(format!("Wrong! {} HP.", hp_change), Tone::Defeat)
                }
            }
        };
        Some(line)
    }
}
