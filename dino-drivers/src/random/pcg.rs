//! PCG random source
//!
//! A `Pcg32` generator seeded once from a hardware entropy source. Each
//! call to `mix_entropy` reseeds it from its own output combined with
//! the supplied value.

use dino_core::traits::RandomSource;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Obstacle draws backed by `Pcg32`
#[derive(Debug, Clone)]
pub struct PcgRandom {
    rng: Pcg32,
}

impl PcgRandom {
    /// Create a generator from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from another generator, usually the hardware one
    pub fn from_entropy<S: RngCore>(source: &mut S) -> Self {
        Self {
            rng: Pcg32::from_rng(source),
        }
    }
}

impl RandomSource for PcgRandom {
    fn next_uniform(&mut self, range: u32) -> u32 {
        if range == 0 {
            return 0;
        }
        self.rng.random_range(0..range)
    }

    fn mix_entropy(&mut self, entropy: u32) {
        let seed = self.rng.next_u64() ^ u64::from(entropy).rotate_left(32);
        self.rng = Pcg32::seed_from_u64(seed);
    }
}
