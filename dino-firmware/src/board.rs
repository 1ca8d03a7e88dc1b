//! Board wiring
//!
//! Pin numbers, the button source and game tuning come from game.toml
//! via build.rs.

use defmt::*;
use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::BOOTSEL;
use embassy_rp::Peri;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Peripheral behind the jump button
pub enum ButtonPin {
    /// On-board BOOTSEL button
    Bootsel(Peri<'static, BOOTSEL>),
    /// Push button on a GPIO
    Gpio {
        pin: Peri<'static, AnyPin>,
        active_low: bool,
    },
}

/// Peripherals taken out of `Peripherals` by `take_board_pins!`
pub struct BoardPins {
    /// LCD data bus, D0 first
    pub lcd_data: [Peri<'static, AnyPin>; 8],
    /// LCD enable strobe
    pub lcd_enable: Peri<'static, AnyPin>,
    /// LCD register select
    pub lcd_rs: Peri<'static, AnyPin>,
    /// LCD read/write, held low
    pub lcd_rw: Peri<'static, AnyPin>,
    /// Game button
    pub button: ButtonPin,
}

/// Log the configured wiring
pub fn log_pin_map() {
    info!(
        "LCD data GPIO {}, E={=u8} RS={=u8} RW={=u8}",
        LCD_DATA_PINS,
        LCD_ENABLE_PIN,
        LCD_RS_PIN,
        LCD_RW_PIN
    );
    info!("Button: {=str}", BUTTON_WIRING);
}
