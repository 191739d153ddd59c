//! # Random Draw Source
//!
//! Every stochastic operator consumes uniform draws in `[0, 1)` from a
//! [`RandomDraw`] source that the caller injects. The order in which operators
//! consume draws is part of the algorithm's observable behavior, so a seeded
//! source reproduces a run exactly.
//!
//! ## Example
//!
//! ```rust
//! use simplega::rng::{RandomDraw, RandomNumberGenerator};
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let x = rng.uniform_between(-5.0, 5.0);
//! assert!((-5.0..=5.0).contains(&x));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A sequential source of uniform values in `[0, 1)`.
///
/// Only [`next_uniform`](RandomDraw::next_uniform) must be provided; the derived
/// draws map a single uniform value each, so they consume exactly one draw.
pub trait RandomDraw {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Returns a value in `[low, high]` derived from one uniform draw.
    ///
    /// `low` must not exceed `high`.
    fn uniform_between(&mut self, low: f64, high: f64) -> f64 {
        let u = self.next_uniform();
        (low + u * (high - low)).max(low).min(high)
    }

    /// Returns an integer in `[low, high]` (inclusive) derived from one uniform draw.
    ///
    /// `low` must not exceed `high`.
    fn index_between(&mut self, low: usize, high: usize) -> usize {
        let span = high - low;
        let u = self.next_uniform();
        low + ((u * (span + 1) as f64) as usize).min(span)
    }
}

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDraw for RandomNumberGenerator {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
