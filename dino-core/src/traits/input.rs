//! Button input trait

/// Trait for the single control button
///
/// A read is a point-in-time sample with no debouncing; holding the
/// button reads as activated on every sample.
pub trait ButtonInput {
    /// Check if the button is currently activated
    fn is_activated(&mut self) -> bool;
}
