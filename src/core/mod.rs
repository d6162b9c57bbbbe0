//! Core game types shared by every layer: constants, config, errors, events.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod frontend;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use events::GameEvent;
pub use frontend::{DecisionRequest, EventSink, LootOffer, PlayerInput};
