use crate::core::constants::{UNARMED_WEAPON_NAME, UNARMORED_NAME};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary effect a weapon may trigger after the wielder acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcKind {
    None,
    Stun,
    Freeze,
}

impl ProcKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProcKind::None => "None",
            ProcKind::Stun => "Stun",
            ProcKind::Freeze => "Freeze",
        }
    }

    /// Past-tense label used in combat messages ("stunned", "frozen").
    pub fn applied_label(&self) -> &'static str {
        match self {
            ProcKind::None => "unaffected",
            ProcKind::Stun => "stunned",
            ProcKind::Freeze => "frozen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    attack_modifier: u32,
    proc_chance: f64,
    proc_kind: ProcKind,
}

impl Weapon {
    /// A weapon without any proc.
    pub fn new(name: impl Into<String>, attack_modifier: u32) -> Self {
        Self {
            name: name.into(),
            attack_modifier,
            proc_chance: 0.0,
            proc_kind: ProcKind::None,
        }
    }

    /// A weapon that may proc. `proc_kind` is forced to `None` when the chance
    /// is zero and the chance is forced to zero when the kind is `None`.
    pub fn with_proc(
        name: impl Into<String>,
        attack_modifier: u32,
        proc_chance: f64,
        proc_kind: ProcKind,
    ) -> Self {
        let chance = if proc_chance.is_nan() {
            0.0
        } else {
            proc_chance.clamp(0.0, 1.0)
        };
        if chance == 0.0 || proc_kind == ProcKind::None {
            return Self::new(name, attack_modifier);
        }
        Self {
            name: name.into(),
            attack_modifier,
            proc_chance: chance,
            proc_kind,
        }
    }

    /// What every hero starts with.
    pub fn unarmed() -> Self {
        Self::new(UNARMED_WEAPON_NAME, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack_modifier(&self) -> u32 {
        self.attack_modifier
    }

    pub fn proc_chance(&self) -> f64 {
        self.proc_chance
    }

    pub fn proc_kind(&self) -> ProcKind {
        self.proc_kind
    }

    /// Rolls the proc against a uniform draw in `[0, 1)`.
    pub fn roll_proc(&self, rng: &mut impl Rng) -> Option<ProcKind> {
        if self.proc_kind == ProcKind::None {
            return None;
        }
        let roll: f64 = rng.gen();
        (roll < self.proc_chance).then_some(self.proc_kind)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::unarmed()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ATK)", self.name, self.attack_modifier)?;
        if self.proc_kind != ProcKind::None {
            write!(
                f,
                " ({:.0}% chance to {})",
                self.proc_chance * 100.0,
                self.proc_kind.name()
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    name: String,
    defense_modifier: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense_modifier: u32) -> Self {
        Self {
            name: name.into(),
            defense_modifier,
        }
    }

    pub fn unarmored() -> Self {
        Self::new(UNARMORED_NAME, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defense_modifier(&self) -> u32 {
        self.defense_modifier
    }
}

impl Default for Armor {
    fn default() -> Self {
        Self::unarmored()
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} DEF)", self.name, self.defense_modifier)
    }
}
