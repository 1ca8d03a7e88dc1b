//! Translating game state into display calls
//!
//! Column 0 belongs to the player: obstacles shifted into it are not
//! drawn, and the player redraw blanks column 0 of the row it left.
//! The staging column lies beyond the display and is never touched.

use crate::arena::{ChangeSet, Row};
use crate::config::{DISPLAY_COLUMNS, PLAYER_COLUMN};
use crate::glyph::GlyphSlot;
use crate::traits::{CharacterDisplay, CharacterDisplayExt, DisplayError};

/// Clear the display and show a fixed two-line message
pub fn render_screen<D: CharacterDisplay>(
    display: &mut D,
    lines: &[&str; 2],
) -> Result<(), DisplayError> {
    display.clear()?;
    display.write_line(0, lines[0])?;
    display.write_line(1, lines[1])
}

/// Repaint the cells touched by one arena step
pub fn render_changes<D: CharacterDisplay>(
    display: &mut D,
    changes: &ChangeSet,
) -> Result<(), DisplayError> {
    for change in changes {
        let row = change.row.index() as u8;

        if (change.from as usize) < DISPLAY_COLUMNS {
            display.clear_cell(row, change.from)?;
        }

        if change.to as usize == PLAYER_COLUMN {
            continue;
        }

        if let Some(glyph) = change.cell.glyph() {
            display.draw_glyph_at(row, change.to, glyph)?;
        }
    }

    Ok(())
}

/// Blank the player column in the row the player is not in
pub fn clear_vacated_row<D: CharacterDisplay>(display: &mut D, row: Row) -> Result<(), DisplayError> {
    display.clear_cell(row.other().index() as u8, PLAYER_COLUMN as u8)
}

/// Draw one player animation frame
pub fn draw_player<D: CharacterDisplay>(
    display: &mut D,
    row: Row,
    frame: GlyphSlot,
) -> Result<(), DisplayError> {
    display.draw_glyph_at(row.index() as u8, PLAYER_COLUMN as u8, frame)
}
