//! Deterministic xorshift32 generator
//!
//! One generator instance feeds grid construction and every spawn of a run,
//! so the whole run consumes a single ordered stream.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Advance `state` once and map the new state to a value in [0, 1).
///
/// Pure: the same input state always yields the same `(value, new_state)`.
#[inline]
pub fn draw(state: u32) -> (f64, u32) {
    let mut x = state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    // Low 24 bits, exactly representable as a fraction of 2^24
    ((x & 0xFF_FFFF) as f64 / 16_777_216.0, x)
}

/// Owned cursor over the [`draw`] stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed of 0 is treated as 1 (zero is a fixed point of xorshift)
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next value in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = draw(self.state);
        self.state = state;
        value
    }

    /// Advance the stream `n` times, discarding the values
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.next_f64();
        }
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.next_f64();
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
