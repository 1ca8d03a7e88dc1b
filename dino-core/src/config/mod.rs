//! Game configuration
//!
//! Geometry of the arena and display, tuning values for the game loop,
//! and the fixed screen texts.

pub mod game;
pub mod screens;

pub use game::{ConfigError, GameConfig};

/// Rows in the arena (and on the display)
pub const ARENA_ROWS: usize = 2;

/// Columns in the arena: 16 visible plus one staging column
pub const ARENA_COLUMNS: usize = 17;

/// Columns visible on the display
pub const DISPLAY_COLUMNS: usize = 16;

/// Column the player is drawn in
pub const PLAYER_COLUMN: usize = 0;

/// Column directly ahead of the player
pub const COLLISION_COLUMN: usize = 1;

/// Rightmost arena column, never drawn; new obstacles appear here
pub const STAGING_COLUMN: usize = ARENA_COLUMNS - 1;
