use crate::core::error::{parse_menu_choice, Result};
use serde::{Deserialize, Serialize};

/// A player's choice for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    Heal,
    Defend,
    Special,
}

impl PlayerAction {
    /// Menu order (1-based in the UI).
    pub const ALL: [PlayerAction; 4] = [
        PlayerAction::Attack,
        PlayerAction::Heal,
        PlayerAction::Defend,
        PlayerAction::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Attack => "Attack",
            PlayerAction::Heal => "Heal",
            PlayerAction::Defend => "Defend",
            PlayerAction::Special => "Special",
        }
    }

    /// Parses a battle menu entry (`1`..=`4`).
    pub fn from_menu(input: &str) -> Result<Self> {
        let choice = parse_menu_choice(input, Self::ALL.len() as u32)?;
        Ok(Self::ALL[(choice - 1) as usize])
    }
}
