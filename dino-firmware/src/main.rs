//! Dino runner firmware
//!
//! Side-scrolling runner on a 16x2 HD44780 character LCD, driven by an
//! RP2040 with a single push button. Jump over high obstacles, stay down
//! under low ones.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use dino_drivers::input::{Button, ButtonSource};
use dino_drivers::lcd::Hd44780;
use dino_drivers::random::PcgRandom;

use crate::board::ButtonPin;
use crate::bootsel::BootselButton;

#[macro_use]
mod board;
mod bootsel;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dino firmware starting...");

    let p = embassy_rp::init(Default::default());
    let pins = take_board_pins!(p);
    info!("Peripherals initialized");
    board::log_pin_map();

    // LCD on the 8-bit bus, RW tied low through its GPIO
    let data = pins.lcd_data.map(|pin| Output::new(pin, Level::Low));
    let mut lcd = Hd44780::new(
        data,
        Output::new(pins.lcd_enable, Level::Low),
        Output::new(pins.lcd_rs, Level::Low),
        Output::new(pins.lcd_rw, Level::Low),
        Delay,
    );
    match lcd.init() {
        Ok(()) => info!("LCD initialized"),
        Err(e) => error!("LCD init failed: {:?}", e),
    }

    let button = match pins.button {
        ButtonPin::Bootsel(bootsel) => ButtonSource::Bootsel(BootselButton::new(bootsel)),
        ButtonPin::Gpio { pin, active_low } => {
            // Idle level opposite to the active level
            let pull = if active_low { Pull::Up } else { Pull::Down };
            ButtonSource::Gpio(Button::new(Input::new(pin, pull), active_low))
        }
    };

    // Seeded from the ring oscillator; button timing is mixed in per session
    let rng = PcgRandom::from_entropy(&mut RoscRng);

    spawner.spawn(tasks::game_task(lcd, button, rng)).unwrap();

    info!("Game task spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
