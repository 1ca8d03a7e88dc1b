//! HD44780 character LCD driver
//!
//! Drives a 16x2 HD44780-compatible module over the full 8-bit parallel
//! bus (D0-D7, E, RS, RW). The RW line is held low: the busy flag is
//! never read, fixed worst-case delays are used instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use dino_core::config::{ARENA_ROWS, DISPLAY_COLUMNS};
use dino_core::glyph::{GlyphBitmap, GlyphSlot};
use dino_core::traits::{CharacterDisplay, DisplayError};

/// HD44780 instruction set
#[allow(dead_code)]
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const CURSOR_SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    // Function set flags
    pub const EIGHT_BIT_MODE: u8 = 0x10;
    pub const TWO_LINE: u8 = 0x08;
}

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; ARENA_ROWS] = [0x00, 0x40];

/// Execution time of most instructions (37 us typical, with margin)
const COMMAND_DELAY_US: u32 = 50;

/// Execution time of clear and home
const CLEAR_DELAY_US: u32 = 2_000;

/// Wait after power-on before the first instruction
const POWER_ON_DELAY_MS: u32 = 50;

/// HD44780 driver on an 8-bit bus
///
/// `data[0]` is D0, `data[7]` is D7.
pub struct Hd44780<P, D> {
    data: [P; 8],
    enable: P,
    register_select: P,
    read_write: P,
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new driver; call [`Hd44780::init`] before use
    pub fn new(data: [P; 8], enable: P, register_select: P, read_write: P, delay: D) -> Self {
        Self {
            data,
            enable,
            register_select,
            read_write,
            delay,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Leaves the display on, cursor and blink off, screen cleared and
    /// the cursor advancing left to right.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.read_write.set_low().map_err(|_| DisplayError::Bus)?;
        self.enable.set_low().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        // Initialization by instruction: function set three times
        let function_set = cmd::FUNCTION_SET | cmd::EIGHT_BIT_MODE | cmd::TWO_LINE;
        self.command(function_set)?;
        self.delay.delay_us(4_100);
        self.command(function_set)?;
        self.delay.delay_us(100);
        self.command(function_set)?;
        self.command(function_set)?;

        self.display_control(false, false, false)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_INCREMENT)?;
        self.display_control(true, false, false)
    }

    /// Switch the display, the underline cursor and the blinking block
    pub fn display_control(
        &mut self,
        display: bool,
        cursor: bool,
        blink: bool,
    ) -> Result<(), DisplayError> {
        let mut flags = cmd::DISPLAY_CONTROL;
        if display {
            flags |= cmd::DISPLAY_ON;
        }
        if cursor {
            flags |= cmd::CURSOR_ON;
        }
        if blink {
            flags |= cmd::BLINK_ON;
        }
        self.command(flags)
    }

    /// Send an instruction
    fn command(&mut self, instruction: u8) -> Result<(), DisplayError> {
        self.write(false, instruction)
    }

    /// Send a byte to DDRAM or CGRAM at the address counter
    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write(true, byte)
    }

    fn write(&mut self, data: bool, byte: u8) -> Result<(), DisplayError> {
        self.register_select
            .set_state(PinState::from(data))
            .map_err(|_| DisplayError::Bus)?;

        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::from(byte & (1 << bit) != 0))
                .map_err(|_| DisplayError::Bus)?;
        }

        // Data is latched on the falling edge of E
        self.enable.set_high().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(1);
        self.enable.set_low().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR_DISPLAY)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS
            .get(row as usize)
            .ok_or(DisplayError::InvalidPosition)?;
        if col as usize >= DISPLAY_COLUMNS {
            return Err(DisplayError::InvalidPosition);
        }
        self.command(cmd::SET_DDRAM_ADDR | (offset + col))
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }

    fn define_glyph(&mut self, slot: GlyphSlot, bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
        // Eight CGRAM bytes per character
        self.command(cmd::SET_CGRAM_ADDR | (slot.code() << 3))?;
        for &row in bitmap {
            self.write_data(row & 0x1F)?;
        }
        Ok(())
    }

    fn draw_glyph(&mut self, slot: GlyphSlot) -> Result<(), DisplayError> {
        self.write_data(slot.code())
    }
}
