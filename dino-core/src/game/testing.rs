//! Mock collaborators for controller and renderer tests

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;

use crate::config::{ARENA_ROWS, DISPLAY_COLUMNS};
use crate::glyph::{GlyphBitmap, GlyphSlot};
use crate::traits::{ButtonInput, CharacterDisplay, DisplayError, RandomSource};

/// Display that keeps a character grid instead of talking to hardware
pub struct ScreenModel {
    cells: [[u8; DISPLAY_COLUMNS]; ARENA_ROWS],
    cursor: (usize, usize),
    pub defined: Vec<GlyphSlot>,
    pub clears: usize,
    pub fail: bool,
}

impl ScreenModel {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; DISPLAY_COLUMNS]; ARENA_ROWS],
            cursor: (0, 0),
            defined: Vec::new(),
            clears: 0,
            fail: false,
        }
    }

    /// Character code at a position
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Row contents, with glyph codes shown as their digit
    pub fn line(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .map(|&c| if c < 8 { char::from(b'0' + c) } else { char::from(c) })
            .collect()
    }

    fn check(&self) -> Result<(), DisplayError> {
        if self.fail {
            Err(DisplayError::Bus)
        } else {
            Ok(())
        }
    }

    fn put(&mut self, code: u8) {
        let (row, col) = self.cursor;
        // Writes past the visible area land in hidden display memory
        if col < DISPLAY_COLUMNS {
            self.cells[row][col] = code;
        }
        self.cursor.1 += 1;
    }
}

impl CharacterDisplay for ScreenModel {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.cells = [[b' '; DISPLAY_COLUMNS]; ARENA_ROWS];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.check()?;
        if row as usize >= ARENA_ROWS || col as usize >= DISPLAY_COLUMNS {
            return Err(DisplayError::InvalidPosition);
        }
        self.cursor = (row as usize, col as usize);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check()?;
        for byte in text.bytes() {
            self.put(byte);
        }
        Ok(())
    }

    fn define_glyph(&mut self, slot: GlyphSlot, _bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
        self.check()?;
        self.defined.push(slot);
        Ok(())
    }

    fn draw_glyph(&mut self, slot: GlyphSlot) -> Result<(), DisplayError> {
        self.check()?;
        self.put(slot.code());
        Ok(())
    }
}

/// Button that replays a script, then reads `fallback` forever
pub struct ScriptedButton {
    script: VecDeque<bool>,
    fallback: bool,
}

impl ScriptedButton {
    pub fn new(script: &[bool], fallback: bool) -> Self {
        Self {
            script: script.iter().copied().collect(),
            fallback,
        }
    }

    pub fn push(&mut self, script: &[bool]) {
        self.script.extend(script.iter().copied());
    }
}

impl ButtonInput for ScriptedButton {
    fn is_activated(&mut self) -> bool {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Random source that replays fixed draws, then draws 0
pub struct ScriptedRng {
    draws: VecDeque<u32>,
    pub mixed: Vec<u32>,
}

impl ScriptedRng {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            mixed: Vec::new(),
        }
    }

    /// Draws not consumed yet
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_uniform(&mut self, _range: u32) -> u32 {
        self.draws.pop_front().unwrap_or(0)
    }

    fn mix_entropy(&mut self, entropy: u32) {
        self.mixed.push(entropy);
    }
}

/// Delay that only adds up the requested time
#[derive(Default)]
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}
