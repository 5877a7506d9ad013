//! Sources of randomness for palette generation.
//!
//! Generation is the one randomized operation in the engine. It never
//! reaches for an ambient global generator: callers pass a
//! [`RandomSource`], so tests can pin every draw.

use std::time::{SystemTime, UNIX_EPOCH};

/// Anything that can produce uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
///
/// The same seed always produces the same sequence, which is what makes a
/// palette reproducible from `--seed`.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A seed of 0 would lock the generator at 0 forever, so it is bumped to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the wall clock. Used when the caller did not ask for a
    /// reproducible palette.
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos() ^ (d.as_secs() as u32));
        Self::new(nanos)
    }

    /// The current internal state (the seed, before any draw).
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next()) / (f64::from(u32::MAX) + 1.0)
    }
}

// ---------------------------------------------------------------------------
// Scripted
// ---------------------------------------------------------------------------

/// Replays a fixed list of values, cycling when it runs out.
///
/// Useful to force exact hues in tests and demos. Values are clamped into
/// `[0, 1)`; an empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
}

impl Scripted {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), pos: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        let Some(&v) = self.values.get(self.pos % self.values.len().max(1)) else {
            return 0.0;
        };
        self.pos += 1;
        if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
