//! RNG module - deterministic random source for piece selection
//!
//! A simple LCG keeps the core free of external randomness: the binary seeds
//! it from the clock, tests seed it with fixed values so whole games replay
//! identically.

/// Linear congruential generator over the full u32 range.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create an RNG from a seed. Seed 0 is remapped to 1 so every stream
    /// starts from a nonzero state.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance and return the next value in the stream.
    pub fn next_u32(&mut self) -> u32 {
        // Numerical Recipes constants; the modulus is 2^32 via wrapping.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
