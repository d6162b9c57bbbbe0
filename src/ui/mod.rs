pub mod character_creation;
pub mod combat_log;
pub mod narration;
mod status_panel;
pub mod terminal;
