//! Arena cell codes and rows

use crate::config::ARENA_ROWS;
use crate::glyph::GlyphSlot;

/// Contents of one arena cell
///
/// The discriminants are the raw cell codes. Obstacle codes are the
/// glyph slots the obstacles are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    /// Player occupancy marker, column 0 only
    Player = 1,
    /// High obstacle, top row only
    High = 3,
    /// Low obstacle, bottom row only
    Low = 4,
}

impl Cell {
    /// Raw cell code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Check if this cell holds an obstacle
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::High | Cell::Low)
    }

    /// Glyph used to draw this cell, if it is an obstacle
    pub fn glyph(self) -> Option<GlyphSlot> {
        match self {
            Cell::High => Some(GlyphSlot::Cloud),
            Cell::Low => Some(GlyphSlot::Bush),
            Cell::Empty | Cell::Player => None,
        }
    }
}

/// Display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    /// Upper row, where the player jumps to and clouds fly
    Top,
    /// Lower row, where the player runs and bushes grow
    #[default]
    Bottom,
}

impl Row {
    /// Both rows, top first
    pub const ALL: [Row; ARENA_ROWS] = [Row::Top, Row::Bottom];

    /// Row index (0 = top)
    pub const fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Bottom => 1,
        }
    }

    /// The row that is not this one
    pub const fn other(self) -> Row {
        match self {
            Row::Top => Row::Bottom,
            Row::Bottom => Row::Top,
        }
    }

    /// The only obstacle kind allowed in this row
    pub const fn obstacle(self) -> Cell {
        match self {
            Row::Top => Cell::High,
            Row::Bottom => Cell::Low,
        }
    }
}
