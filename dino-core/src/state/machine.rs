//! State machine definition
//!
//! Screen contents and input handling are a function of the current
//! state; the state only changes through [`SessionState::transition`].

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Power-on prompt, shown once
    #[default]
    Attract,
    /// Obstacles scrolling, button jumps
    Playing,
    /// Collision happened, waiting for the button to play again
    GameOver,
}

impl SessionState {
    /// Check if the arena is being advanced in this state
    pub fn is_playing(&self) -> bool {
        matches!(self, SessionState::Playing)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use SessionState::*;

        match (self, event) {
            (Attract, ButtonPressed) => Playing,
            (Playing, Collision) => GameOver,
            // The attract screen is not shown again after the first game
            (GameOver, ButtonPressed) => Playing,

            // Default: stay in current state
            _ => self,
        }
    }
}
