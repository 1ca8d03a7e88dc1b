//! GPIO push button
//!
//! Reads a single button on a GPIO pin. The pin can be configured as
//! active-high or active-low (button to ground with a pull-up).

use embedded_hal::digital::InputPin;

use dino_core::traits::ButtonInput;

/// Push button on a GPIO input
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// Create a new button input
    ///
    /// # Arguments
    /// - `pin`: The GPIO input pin
    /// - `active_low`: If true, the button reads pressed when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create a button that pulls the pin high when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a button that pulls the pin low when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> ButtonInput for Button<P> {
    fn is_activated(&mut self) -> bool {
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };

        // A failed read counts as released
        level.unwrap_or(false)
    }
}
