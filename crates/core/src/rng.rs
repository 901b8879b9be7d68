//! RNG module - seeded shuffling for board layouts
//!
//! A small deterministic LCG keeps the core crate dependency-free and makes
//! board layouts reproducible from a seed in tests. Real games pass a seed
//! drawn from OS entropy at the call site, so layouts are not reproducible
//! across runs.

/// Simple LCG (Linear Congruential Generator) RNG.
///
/// Uses Knuth's MMIX multiplier over a 64-bit state; the high 32 bits are
/// returned since the low bits of an LCG have short periods.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        // Avoid the all-zero fixed point.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}
