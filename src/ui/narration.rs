//! Story text between battles.

use lost_crown::campaign::DefeatCause;

pub const TITLE: &str = "THE LOST CROWN";

pub const WELCOME: &[&str] = &[
    "The crown of the old kingdom was stolen by King Chaus,",
    "who hides it at the bottom of a tower full of ghouls.",
    "Choose a champion and fight your way down.",
];

const CROWN_ART: &[&str] = &[
    r"      o   o   o      ",
    r"     /\  /\  /\      ",
    r"    /  \/  \/  \     ",
    r"   |  *   *   * |    ",
    r"   |____________|    ",
];

const LEVEL_INTROS: &[&str] = &[
    "A damp stairwell. Something shuffles in the dark.",
    "Bones crunch underfoot. The air smells of old iron.",
    "Torches gutter as you pass. You are being watched.",
    "Claw marks line the walls, fresh and deep.",
    "Whispers echo from a flooded hall ahead.",
];

/// One line of flavour for an ordinary level.
pub fn level_intro(level: u32, max_levels: u32) -> String {
    if level >= max_levels {
        return "The final chamber. King Chaus rises from the stolen throne, the crown on his brow."
            .to_string();
    }
    let index = (level.saturating_sub(1) as usize) % LEVEL_INTROS.len();
    LEVEL_INTROS[index].to_string()
}

pub fn victory_lines(elapsed_ms: i64) -> Vec<String> {
    let mut lines: Vec<String> = CROWN_ART.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());
    lines.push("King Chaus falls. The lost crown is yours!".to_string());
    lines.push(format!(
        "You reclaimed it in {:.1} seconds.",
        elapsed_ms.max(0) as f64 / 1000.0
    ));
    lines
}

pub fn defeat_line(level: u32, cause: DefeatCause) -> String {
    match cause {
        DefeatCause::Battle => format!("You fell on level {}. The crown stays lost.", level),
        DefeatCause::TriviaPenalty => format!(
            "A wrong answer on level {} drained the last of your strength.",
            level
        ),
    }
}
