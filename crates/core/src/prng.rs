//! Random sources for the draw engine.
//!
//! The engine never reaches for a global generator: every sampling call takes
//! a `&mut` [`RandomSource`]. [`Xorshift64`] is the stock implementation, a
//! small seedable generator whose state can be saved and replayed.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed 64-bit values.
///
/// This trait is object-safe, so callers may hold a `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Returns the next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly distributed integer in `[0, n)`.
    ///
    /// Uses modulo reduction; for the small `n` the engine asks for the bias
    /// is below 2^-58.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    fn next_below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Shift parameters (13, 7, 17). A seed of 0 is replaced with a non-zero
/// fallback since all-zeros is a fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }
}

impl RandomSource for Xorshift64 {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}
