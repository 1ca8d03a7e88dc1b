//! Random sources

pub mod pcg;

pub use pcg::PcgRandom;
