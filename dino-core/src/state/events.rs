//! Events that trigger session transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Button read as activated while waiting on a screen
    ButtonPressed,
    /// An obstacle was about to shift into the player
    Collision,
}
