//! Collaborator traits
//!
//! These traits define the interface between the game logic and the
//! hardware-specific implementations. Timed waits use
//! [`embedded_hal_async::delay::DelayNs`] directly.

pub mod display;
pub mod input;
pub mod random;

pub use display::{CharacterDisplay, CharacterDisplayExt, DisplayError};
pub use input::ButtonInput;
pub use random::RandomSource;
