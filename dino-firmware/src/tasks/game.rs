//! Game task
//!
//! Owns the LCD, the button and the generator and runs the game
//! controller forever. A display error restarts the run loop from the
//! attract screen.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Timer};

use dino_core::game::GameController;
use dino_drivers::input::{Button, ButtonSource};
use dino_drivers::lcd::Hd44780;
use dino_drivers::random::PcgRandom;

use crate::board;
use crate::bootsel::BootselButton;

/// Pause before restarting after a display error
const RESTART_DELAY_MS: u64 = 500;

/// The LCD as wired on the board
pub type GameLcd = Hd44780<Output<'static>, Delay>;

/// The button as selected in game.toml
pub type GameButton = ButtonSource<BootselButton, Button<Input<'static>>>;

/// Game task - runs attract, play and game-over screens in a loop
#[embassy_executor::task]
pub async fn game_task(lcd: GameLcd, button: GameButton, rng: PcgRandom) {
    info!("Game task started");

    let mut controller = match GameController::new(lcd, button, rng, Delay, board::GAME_CONFIG) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Invalid game configuration: {:?}", e);
            return;
        }
    };

    loop {
        match controller.run().await {
            Ok(never) => match never {},
            Err(e) => {
                error!("Display error: {:?}, restarting", e);
                Timer::after_millis(RESTART_DELAY_MS).await;
            }
        }
    }
}
