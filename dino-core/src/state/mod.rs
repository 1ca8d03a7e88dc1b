//! Session state machine
//!
//! Decides which screen is shown and which inputs are meaningful.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::SessionState;
