//! Scrolling obstacle field
//!
//! The field is a fixed-depth shift register per display row. Each tick
//! moves every obstacle one column toward the player, which matches the
//! character-cell granularity of the display: no positions or velocities
//! are tracked.

pub mod cell;
pub mod model;

pub use cell::{Cell, Row};
pub use model::{Arena, CellMove, ChangeSet, MAX_MOVES};
