use crate::core::constants::{BOSS_NAME, MAX_NAME_LENGTH, MONSTER_NAME};
use crate::core::error::{GameError, Result};

/// Validates a hero name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(GameError::MalformedInput("Name cannot be empty".to_string()));
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(GameError::MalformedInput(format!(
            "Name must be {} characters or less",
            MAX_NAME_LENGTH
        )));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(GameError::MalformedInput(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        ));
    }

    if is_monster_name(trimmed) {
        return Err(GameError::InvalidSelection(format!(
            "{} is already taken by the crown's guardians",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// Monster names are `Ghoul N`; the health bars and log key on display names.
fn is_monster_name(name: &str) -> bool {
    if name.eq_ignore_ascii_case(BOSS_NAME) {
        return true;
    }
    match name.split_once(' ') {
        Some((base, number)) => {
            base.eq_ignore_ascii_case(MONSTER_NAME)
                && !number.is_empty()
                && number.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
