//! Board-agnostic core logic for the Dino runner
//!
//! This crate contains all game logic that does not depend on
//! specific hardware implementations:
//!
//! - Scrolling two-row obstacle field (shift, spawn, collision)
//! - Player row and jump limiting
//! - Session state machine (attract, playing, game over)
//! - Custom glyph definitions
//! - Game controller driving the display, button, random and delay collaborators
//! - Collaborator traits implemented by drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod arena;
pub mod config;
pub mod game;
pub mod glyph;
pub mod player;
pub mod state;
pub mod traits;
