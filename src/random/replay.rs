//! # Replay Randomizer
//!
//! Deterministic random source that hands out a recorded sequence of values.
//! Used to rebuild known dungeons in tests and demos.

use super::Randomizer;
use crate::{DelveError, DelveResult};
use std::collections::VecDeque;

/// Random source that drains a pre-loaded queue, one value per draw.
///
/// # Examples
///
/// ```
/// use delve::{Randomizer, ReplayRandomizer};
///
/// let mut rng = ReplayRandomizer::new([3, 1]);
/// assert_eq!(rng.next_int(0, 5).unwrap(), 3);
/// assert_eq!(rng.next_int(0, 5).unwrap(), 1);
/// assert!(rng.next_int(0, 5).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplayRandomizer {
    values: VecDeque<usize>,
    consumed: usize,
}

impl ReplayRandomizer {
    /// Creates a replay source over the given values.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Appends more recorded values to the end of the queue.
    pub fn extend(&mut self, values: impl IntoIterator<Item = usize>) {
        self.values.extend(values);
    }

    /// Number of values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Whether the queue has been fully drained.
    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl Randomizer for ReplayRandomizer {
    fn next_int(&mut self, min: usize, max_exclusive: usize) -> DelveResult<usize> {
        if min > max_exclusive {
            return Err(DelveError::InvalidRange {
                min,
                max: max_exclusive,
            });
        }

        let value = *self.values.front().ok_or(DelveError::ReplayExhausted {
            consumed: self.consumed,
        })?;
        // A rejected value stays queued.
        if !(min..max_exclusive).contains(&value) {
            return Err(DelveError::ReplayOutOfRange {
                value,
                min,
                max: max_exclusive,
            });
        }

        self.values.pop_front();
        self.consumed += 1;

        log::trace!("replay draw #{} -> {}", self.consumed, value);
        Ok(value)
    }
}
