//! BOOTSEL button
//!
//! The BOOTSEL button shares the QSPI chip-select line with the flash,
//! so every read briefly stalls execute-in-place. Reads must happen on
//! core 0.

use embassy_rp::bootsel::is_bootsel_pressed;
use embassy_rp::peripherals::BOOTSEL;
use embassy_rp::Peri;

use dino_core::traits::ButtonInput;

/// The Pico's on-board BOOTSEL button
pub struct BootselButton {
    bootsel: Peri<'static, BOOTSEL>,
}

impl BootselButton {
    pub fn new(bootsel: Peri<'static, BOOTSEL>) -> Self {
        Self { bootsel }
    }
}

impl ButtonInput for BootselButton {
    fn is_activated(&mut self) -> bool {
        is_bootsel_pressed(self.bootsel.reborrow())
    }
}
