//! Item system: equipment types, loot generation, and loot names.

pub mod generation;
pub mod names;
pub mod types;

pub use generation::*;
pub use names::*;
pub use types::*;
