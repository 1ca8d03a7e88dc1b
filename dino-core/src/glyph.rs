//! Custom character glyphs
//!
//! Character LCDs of the HD44780 family accept up to eight user-defined
//! 5x8 characters in CGRAM. The game uses four of them: two frames of
//! the running dinosaur, and one glyph per obstacle kind. Each bitmap row
//! uses the low five bits, most significant bit leftmost.

/// Pixel rows per glyph
pub const GLYPH_ROWS: usize = 8;

/// One glyph bitmap, top row first
pub type GlyphBitmap = [u8; GLYPH_ROWS];

/// Dinosaur, rear leg forward
pub const DINO_STRIDE: GlyphBitmap = [
    0b00110, 0b00111, 0b01111, 0b11110, 0b11110, 0b10100, 0b10110, 0b11000,
];

/// Dinosaur, front leg forward
pub const DINO_STEP: GlyphBitmap = [
    0b00110, 0b00111, 0b01111, 0b11110, 0b11110, 0b10100, 0b11100, 0b00110,
];

/// Cloud (high obstacle)
pub const CLOUD: GlyphBitmap = [
    0b00000, 0b00000, 0b01100, 0b11111, 0b00000, 0b00110, 0b01111, 0b00000,
];

/// Bush (low obstacle)
pub const BUSH: GlyphBitmap = [
    0b00000, 0b00100, 0b10100, 0b01100, 0b00101, 0b00110, 0b00100, 0b00100,
];

/// CGRAM slot a glyph is stored in
///
/// The slot number is also the character code that draws the glyph.
/// Obstacle slots match the arena cell codes of the obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GlyphSlot {
    /// First player animation frame
    DinoStride = 1,
    /// Second player animation frame
    DinoStep = 2,
    /// High obstacle
    Cloud = 3,
    /// Low obstacle
    Bush = 4,
}

impl GlyphSlot {
    /// Every slot the game defines, in upload order
    pub const ALL: [GlyphSlot; 4] = [
        GlyphSlot::DinoStride,
        GlyphSlot::DinoStep,
        GlyphSlot::Cloud,
        GlyphSlot::Bush,
    ];

    /// Character code (and CGRAM slot index)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Bitmap stored in this slot
    pub const fn bitmap(self) -> &'static GlyphBitmap {
        match self {
            GlyphSlot::DinoStride => &DINO_STRIDE,
            GlyphSlot::DinoStep => &DINO_STEP,
            GlyphSlot::Cloud => &CLOUD,
            GlyphSlot::Bush => &BUSH,
        }
    }
}
