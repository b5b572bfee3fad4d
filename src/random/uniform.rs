//! # Uniform Randomizer
//!
//! Production random source drawing uniformly distributed integers.

use super::Randomizer;
use crate::{DelveError, DelveResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source backed by [`StdRng`].
///
/// # Examples
///
/// ```
/// use delve::{Randomizer, UniformRandomizer};
///
/// let mut rng = UniformRandomizer::seeded(42);
/// let value = rng.next_int(1, 5).unwrap();
/// assert!((1..5).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: StdRng,
}

impl UniformRandomizer {
    /// Creates a randomizer seeded from operating system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible randomizer from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a randomizer, seeded when a seed is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for UniformRandomizer {
    fn next_int(&mut self, min: usize, max_exclusive: usize) -> DelveResult<usize> {
        // gen_range panics on an empty range
        if min >= max_exclusive {
            return Err(DelveError::InvalidRange {
                min,
                max: max_exclusive,
            });
        }
        Ok(self.rng.gen_range(min..max_exclusive))
    }
}
