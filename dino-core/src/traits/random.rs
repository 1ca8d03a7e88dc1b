//! Random source trait

/// Trait for a uniform random integer source
pub trait RandomSource {
    /// Draw a value uniformly from `0..range`
    ///
    /// `range` is at least 1.
    fn next_uniform(&mut self, range: u32) -> u32;

    /// Fold externally gathered entropy into the generator state
    ///
    /// The controller passes the number of polls spent waiting for the
    /// button, which depends on human reaction time.
    fn mix_entropy(&mut self, _entropy: u32) {}
}
