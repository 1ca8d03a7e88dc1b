//! Fixed two-line screen texts
//!
//! Each line is exactly one display row wide so it overwrites
//! whatever was there before.

/// Attract screen shown once after power-on
pub const ATTRACT_SCREEN: [&str; 2] = ["  PRESS BUTTON  ", "    TO START    "];

/// Shown after a collision until the button is pressed
pub const GAME_OVER_SCREEN: [&str; 2] = ["   GAME OVER!   ", " DINO UNALIVED! "];
