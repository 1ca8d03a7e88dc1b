//! Game controller
//!
//! Sequences the attract screen, play sessions and the game-over screen,
//! advancing the arena once per tick and repainting only what changed.

pub mod controller;
pub mod render;
pub mod stats;

pub use controller::{GameController, TickOutcome};
pub use stats::SessionStats;

#[cfg(test)]
pub(crate) mod testing;
