//! # Random Sources
//!
//! The injected random capability used by every construction step and every
//! random movement decision.
//!
//! Two implementations are provided:
//! - [`UniformRandomizer`]: uniform draws backed by a seedable `StdRng`
//! - [`ReplayRandomizer`]: returns a recorded sequence of values, in order

pub mod replay;
pub mod uniform;

pub use replay::*;
pub use uniform::*;

use crate::DelveResult;

/// Source of random integers.
///
/// Callers pass `&mut dyn Randomizer` explicitly so that the order of draws is
/// fully determined by the call sequence. Replaying the same values through a
/// [`ReplayRandomizer`] reproduces the same decisions.
pub trait Randomizer {
    /// Draws an integer in `[min, max_exclusive)`.
    ///
    /// Fails with [`crate::DelveError::InvalidRange`] when `min > max_exclusive`.
    fn next_int(&mut self, min: usize, max_exclusive: usize) -> DelveResult<usize>;

    /// Draws an index into a collection of `len` elements.
    fn next_index(&mut self, len: usize) -> DelveResult<usize> {
        self.next_int(0, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_dispatch() {
        let mut sources: Vec<Box<dyn Randomizer>> = vec![
            Box::new(UniformRandomizer::seeded(7)),
            Box::new(ReplayRandomizer::new([2])),
        ];

        for source in sources.iter_mut() {
            let value = source.next_index(3).unwrap();
            assert!(value < 3);
        }
    }
}
