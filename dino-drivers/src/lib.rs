//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dino-core for the hardware the game runs on:
//!
//! - Character LCD (HD44780, 8-bit parallel bus)
//! - Push button (GPIO input, active-high or active-low)
//! - Random source (`Pcg32` from `rand_pcg`, seeded from hardware entropy)
//! - Button selector for boards with more than one button source

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod lcd;
pub mod random;
