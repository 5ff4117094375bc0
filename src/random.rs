//! Random range capability
//!
//! Every timer jitter and blink count is drawn through [`RandomRange`].
//! Any `rand` generator works through the blanket implementation.

use rand::{Rng, RngCore};

/// Source of uniformly distributed integers
pub trait RandomRange {
    /// Returns a value in `[min, max)`
    ///
    /// An empty range (`min >= max`) returns `min`.
    fn random_range(&mut self, min: u32, max: u32) -> u32;

    /// Returns a value in `[0, max)`
    fn random_below(&mut self, max: u32) -> u32 {
        self.random_range(0, max)
    }
}

impl<R: RngCore> RandomRange for R {
    fn random_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..max)
    }
}

/// Half-open bounds `[min, max)` of a random duration in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    pub min: u32,
    pub max: u32,
}

impl Jitter {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Jitter in `[0, max)`
    pub const fn below(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// Draw a value from `[min, max)`
    ///
    /// Misconfigured bounds (`min > max`) collapse to `min`.
    pub fn sample<R: RandomRange + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(self.min, self.max)
    }
}
