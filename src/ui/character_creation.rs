use super::combat_log::Tone;
use super::terminal::TerminalFrontend;
use lost_crown::character::{validate_name, Archetype, Player, ARCHETYPES};
use lost_crown::core::error::Result;

/// Menu lines for the five classes, numbered 1-5 in table order.
pub fn class_menu() -> Vec<String> {
    ARCHETYPES
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {:<8} HP {:>4}  ATK {:>3}  DEF {:>2}  {} - {} (cooldown {})",
                i + 1,
                p.archetype.name(),
                p.max_hp,
                p.attack,
                p.defense,
                p.blurb,
                p.special.name,
                p.special.cooldown
            )
        })
        .collect()
}

/// Asks for a class, then a name, re-prompting on bad input.
pub fn create_hero(ui: &mut TerminalFrontend) -> Result<Player> {
    let archetype = loop {
        let input = ui.read_line("Choose your class (1-5):", class_menu())?;
        match Archetype::from_menu(&input) {
            Ok(archetype) => break archetype,
            Err(err) if err.is_recoverable() => ui.note(err.to_string(), Tone::Warning),
            Err(err) => return Err(err),
        }
    };

    let name = loop {
        let input = ui.read_line(
            "Name your hero:",
            vec![
                format!("Class: {}", archetype.name()),
                "1-16 letters, numbers, spaces, hyphens or underscores".to_string(),
            ],
        )?;
        match validate_name(&input) {
            Ok(name) => break name,
            Err(err) if err.is_recoverable() => ui.note(err.to_string(), Tone::Warning),
            Err(err) => return Err(err),
        }
    };

    Ok(Player::new(name, archetype))
}
