//! # Random Sources
//!
//! Patterns that scatter marks (stochastic, stipple, cells) draw from a
//! [`RandomSource`]. The default is [`SeededRandom`], a tiny linear
//! congruential generator whose sequence is fixed by its seed, so the same
//! job always produces byte-identical vector output.
//!
//! ```text
//! seed' = (seed * 9301 + 49297) mod 233280
//! value = seed' / 233280
//! ```
//!
//! [`EntropyRandom`] wraps the thread RNG for callers that explicitly want
//! non-reproducible stippling.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u32 = 12345;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// A stream of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// Deterministic linear congruential generator.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64,
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next(&mut self) -> f64 {
        // Reducing first keeps the product inside u64 for any u32 seed.
        self.state = ((self.state % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

/// Non-reproducible source backed by the thread RNG.
pub struct EntropyRandom {
    rng: rand::rngs::ThreadRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Which source the stipple pattern draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomSourceKind {
    /// Same seed as every other pattern (reproducible).
    #[default]
    Seeded,
    /// Fresh entropy on every run.
    Entropy,
}

impl RandomSourceKind {
    /// Build a boxed source for one channel render.
    pub fn build(self, seed: u32) -> Box<dyn RandomSource> {
        match self {
            RandomSourceKind::Seeded => Box::new(SeededRandom::new(seed)),
            RandomSourceKind::Entropy => Box::new(EntropyRandom::new()),
        }
    }
}
