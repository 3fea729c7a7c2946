//! Random-number collaborator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source used for every card draw and dice roll.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `low..high`.
    ///
    /// Callers always pass `low < high`.
    fn random_in_range(&mut self, low: u8, high: u8) -> u8;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_in_range(&mut self, low: u8, high: u8) -> u8 {
        (**self).random_in_range(low, high)
    }
}

/// [`RandomSource`] backed by a seeded ChaCha8 generator.
///
/// Seeding is the caller's concern. On hardware a floating analog pin or a
/// free-running timer makes a good enough seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a generator from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_in_range(&mut self, low: u8, high: u8) -> u8 {
        self.rng.random_range(low..high)
    }
}
