//! Sources of uniform samples used by the draw engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Map a unit sample onto `0..span` by scaling.
///
/// Only exact while `span` fits in the 53-bit mantissa of an `f64`.
pub fn scale_unit(sample: f64, span: u128) -> u128 {
    // Float-to-int casts saturate, so a sample at the top of the interval
    // cannot land past the last slot after the clamp.
    let index = (sample * span as f64).floor() as u128;
    index.min(span.saturating_sub(1))
}

/// Supplies independent uniform samples.
pub trait RandomSource {
    /// Sample in the half-open interval `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Integer in `0..span`. `span` must be non-zero.
    fn next_below(&mut self, span: u128) -> u128 {
        scale_unit(self.next_unit(), span)
    }
}

/// The platform generator. No seeding and no reproducibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_below(&mut self, span: u128) -> u128 {
        rand::thread_rng().gen_range(0..span)
    }
}

/// Deterministic generator for simulations and tests
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_below(&mut self, span: u128) -> u128 {
        self.rng.gen_range(0..span)
    }
}

/// Always returns the same sample, clamped into `[0, 1)`.
///
/// Integer draws scale that sample, so 0.999999 lands on the last slot.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(f64);

impl FixedRandom {
    pub fn new(sample: f64) -> Self {
        let sample = if sample.is_nan() { 0.0 } else { sample };
        Self(sample.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
