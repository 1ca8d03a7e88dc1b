//! Character display trait

use crate::config::DISPLAY_COLUMNS;
use crate::glyph::{GlyphBitmap, GlyphSlot};

/// Errors that can occur when talking to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin write failed
    Bus,
    /// Cursor position outside the display
    InvalidPosition,
}

/// Trait for a two-row character display with user-defined glyphs
///
/// Text is written at the cursor, which advances one cell per
/// character.
pub trait CharacterDisplay {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `row`: Row number (0-1)
    /// - `col`: Column number (0-15)
    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Store a glyph bitmap in a custom character slot
    ///
    /// The cursor position is unspecified afterwards.
    fn define_glyph(&mut self, slot: GlyphSlot, bitmap: &GlyphBitmap) -> Result<(), DisplayError>;

    /// Draw a previously defined glyph at the cursor
    fn draw_glyph(&mut self, slot: GlyphSlot) -> Result<(), DisplayError>;
}

/// Helper trait for drawing at explicit positions
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Blank one cell
    fn clear_cell(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.move_cursor(row, col)?;
        self.write_text(" ")
    }

    /// Draw a glyph at a position
    fn draw_glyph_at(&mut self, row: u8, col: u8, slot: GlyphSlot) -> Result<(), DisplayError> {
        self.move_cursor(row, col)?;
        self.draw_glyph(slot)
    }

    /// Write a full row, padded with spaces or truncated to the display width
    ///
    /// One character per cell; characters outside ASCII show as `?`.
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let mut buf = [b' '; DISPLAY_COLUMNS];
        for (cell, c) in buf.iter_mut().zip(text.chars()) {
            *cell = if c.is_ascii() { c as u8 } else { b'?' };
        }

        // Buffer holds ASCII only
        let line = core::str::from_utf8(&buf).unwrap_or_default();
        self.move_cursor(row, 0)?;
        self.write_text(line)
    }

    /// Define every glyph the game uses
    fn define_game_glyphs(&mut self) -> Result<(), DisplayError> {
        for slot in GlyphSlot::ALL {
            self.define_glyph(slot, slot.bitmap())?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> CharacterDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Cursor(u8, u8),
        Text(std::string::String),
        Define(GlyphSlot),
        Glyph(GlyphSlot),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl CharacterDisplay for Recorder {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
            self.ops.push(Op::Cursor(row, col));
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(text.into()));
            Ok(())
        }

        fn define_glyph(&mut self, slot: GlyphSlot, _bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
            self.ops.push(Op::Define(slot));
            Ok(())
        }

        fn draw_glyph(&mut self, slot: GlyphSlot) -> Result<(), DisplayError> {
            self.ops.push(Op::Glyph(slot));
            Ok(())
        }
    }

    #[test]
    fn test_clear_cell_writes_space() {
        let mut display = Recorder::default();
        display.clear_cell(1, 7).unwrap();
        assert_eq!(display.ops, vec![Op::Cursor(1, 7), Op::Text(" ".into())]);
    }

    #[test]
    fn test_draw_glyph_at() {
        let mut display = Recorder::default();
        display.draw_glyph_at(0, 3, GlyphSlot::Cloud).unwrap();
        assert_eq!(display.ops, vec![Op::Cursor(0, 3), Op::Glyph(GlyphSlot::Cloud)]);
    }

    #[test]
    fn test_write_line_pads() {
        let mut display = Recorder::default();
        display.write_line(1, "HI").unwrap();
        assert_eq!(
            display.ops,
            vec![Op::Cursor(1, 0), Op::Text("HI              ".into())]
        );
    }

    #[test]
    fn test_write_line_truncates() {
        let mut display = Recorder::default();
        display.write_line(0, "0123456789ABCDEFGHIJ").unwrap();
        assert_eq!(display.ops[1], Op::Text("0123456789ABCDEF".into()));
    }

    #[test]
    fn test_write_line_replaces_non_ascii() {
        let mut display = Recorder::default();
        display.write_line(0, "DINO ÜBER ALLES").unwrap();
        assert_eq!(display.ops[1], Op::Text("DINO ?BER ALLES ".into()));

        // Cut counts characters, so a multi-byte one at the edge is kept
        display.write_line(1, "ABCDEFGHIJKLMNOé!").unwrap();
        assert_eq!(display.ops[3], Op::Text("ABCDEFGHIJKLMNO?".into()));
    }

    #[test]
    fn test_define_game_glyphs() {
        let mut display = Recorder::default();
        display.define_game_glyphs().unwrap();
        let defined: Vec<_> = display
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Define(slot) => Some(*slot),
                _ => None,
            })
            .collect();
        assert_eq!(defined, GlyphSlot::ALL.to_vec());
    }
}
