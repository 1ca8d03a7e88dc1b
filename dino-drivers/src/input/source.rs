//! Button source chosen at build time
//!
//! A Pico can use its on-board BOOTSEL button or a push button wired to
//! a GPIO. Both implement `ButtonInput`; this enum lets the firmware pick
//! one while keeping a single concrete type for the game task.

use dino_core::traits::ButtonInput;

/// Either the BOOTSEL button or a GPIO button
pub enum ButtonSource<B, G> {
    /// On-board BOOTSEL button
    Bootsel(B),
    /// External button on a GPIO
    Gpio(G),
}

impl<B: ButtonInput, G: ButtonInput> ButtonInput for ButtonSource<B, G> {
    fn is_activated(&mut self) -> bool {
        match self {
            ButtonSource::Bootsel(button) => button.is_activated(),
            ButtonSource::Gpio(button) => button.is_activated(),
        }
    }
}
