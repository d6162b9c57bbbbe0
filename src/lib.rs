//! The Lost Crown - turn-based terminal combat campaign library.
//!
//! This module exposes the game logic for the terminal binary, the balance
//! simulator, and tests.

pub mod build_info;
pub mod campaign;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;
