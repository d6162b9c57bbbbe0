use thiserror::Error;

/// Everything that can go wrong while talking to the player.
///
/// Only the first two variants are expected during normal play and both are
/// recovered locally (re-prompt, or default to Attack inside a battle).
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Player quit")]
    Quit,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// True for input mistakes that must never end a run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidSelection(_) | GameError::MalformedInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Parses a 1-based menu choice in `1..=options`.
pub fn parse_menu_choice(input: &str, options: u32) -> Result<u32> {
    let trimmed = input.trim();
    let choice: u32 = trimmed
        .parse()
        .map_err(|_| GameError::MalformedInput(format!("expected a number, got {trimmed:?}")))?;
    if choice == 0 || choice > options {
        return Err(GameError::InvalidSelection(format!(
            "{choice} is not between 1 and {options}"
        )));
    }
    Ok(choice)
}

/// Y/N prompts: only `Y` (any case) confirms, everything else declines.
pub fn parse_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice_in_range() {
        assert_eq!(parse_menu_choice("3", 5).unwrap(), 3);
        assert_eq!(parse_menu_choice("  1\n", 4).unwrap(), 1);
    }

    #[test]
    fn test_parse_menu_choice_out_of_range() {
        assert!(matches!(
            parse_menu_choice("6", 5),
            Err(GameError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_menu_choice("0", 5),
            Err(GameError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_parse_menu_choice_not_a_number() {
        let err = parse_menu_choice("attack", 4).unwrap_err();
        assert!(matches!(err, GameError::MalformedInput(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_quit_and_io_are_not_recoverable() {
        assert!(!GameError::Quit.is_recoverable());
        let io = GameError::from(std::io::Error::new(std::io::ErrorKind::Other, "gone"));
        assert!(!io.is_recoverable());
    }

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation(" Y "));
        assert!(!parse_confirmation("yes"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("n"));
    }
}
