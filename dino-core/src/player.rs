//! Player row and jump limiting
//!
//! The player jumps while the button is held, but only for a bounded
//! number of consecutive ticks. Once the cap is reached the player is
//! forced back to the bottom row on the next tick, even if the button
//! is still held.

use crate::arena::Row;

/// Result of one player update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerMove {
    /// Row before the update
    pub from: Row,
    /// Row after the update
    pub to: Row,
    /// True if this update was a jump tick
    pub jumped: bool,
}

/// Player position and consecutive jump counter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerState {
    row: Row,
    consecutive_jumps: u8,
    jump_cap: u8,
}

impl PlayerState {
    /// Create a player on the bottom row
    pub fn new(jump_cap: u8) -> Self {
        Self {
            row: Row::Bottom,
            consecutive_jumps: 0,
            jump_cap,
        }
    }

    /// Return to the bottom row with no jumps counted
    pub fn reset(&mut self) {
        self.row = Row::Bottom;
        self.consecutive_jumps = 0;
    }

    /// Current row
    pub fn row(&self) -> Row {
        self.row
    }

    /// Consecutive ticks spent in the top row
    pub fn consecutive_jumps(&self) -> u8 {
        self.consecutive_jumps
    }

    /// Maximum consecutive ticks in the top row
    pub fn jump_cap(&self) -> u8 {
        self.jump_cap
    }

    /// Apply one button sample
    pub fn update(&mut self, activated: bool) -> PlayerMove {
        let from = self.row;
        let jumped = activated && self.consecutive_jumps < self.jump_cap;

        if jumped {
            self.row = Row::Top;
            self.consecutive_jumps += 1;
        } else {
            self.row = Row::Bottom;
            self.consecutive_jumps = 0;
        }

        PlayerMove {
            from,
            to: self.row,
            jumped,
        }
    }
}
