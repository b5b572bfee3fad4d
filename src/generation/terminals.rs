//! # Terminal Selection
//!
//! Picks the start and end caves of a dungeon.

use crate::{config, Adjacency, Cave, Coordinate, DelveError, DelveResult, GridShape, Randomizer};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Chooses a start/end pair of caves that lie far enough apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSelector {
    /// Number of random start draws before giving up
    pub max_attempts: usize,
    /// Minimum shortest-path distance between start and end
    pub min_distance: usize,
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self {
            max_attempts: config::MAX_TERMINAL_ATTEMPTS,
            min_distance: config::MIN_TERMINAL_DISTANCE,
        }
    }
}

impl TerminalSelector {
    /// Draws start candidates until one has a distant partner.
    ///
    /// Every attempt draws one cell from `rng` and counts against
    /// `max_attempts`, including draws that land on a tunnel. For a cave
    /// start, the end is the first cave in row-major order, other than the
    /// start, whose distance is at least `min_distance`.
    pub fn select(
        &self,
        shape: &GridShape,
        caves: &[Cave],
        adjacency: &Adjacency,
        rng: &mut dyn Randomizer,
    ) -> DelveResult<(Coordinate, Coordinate)> {
        for attempt in 1..=self.max_attempts {
            let index = rng.next_index(shape.cell_count())?;
            let Some(candidate) = caves.get(index) else {
                return Err(DelveError::InvalidLocation(shape.coordinate_at(index)));
            };
            if candidate.is_tunnel() {
                trace!("Attempt {}: {} is a tunnel", attempt, candidate.location());
                continue;
            }

            let start = candidate.location();
            let end = caves
                .iter()
                .filter(|cave| !cave.is_tunnel() && cave.location() != start)
                .map(Cave::location)
                .find(|&end| {
                    adjacency
                        .distance(start, end)
                        .is_some_and(|distance| distance >= self.min_distance)
                });

            match end {
                Some(end) => {
                    debug!(
                        "Selected start {} and end {} after {} attempts",
                        start, end, attempt
                    );
                    return Ok((start, end));
                }
                None => trace!("Attempt {}: no distant cave from {}", attempt, start),
            }
        }

        warn!(
            "No start/end pair at distance {} after {} attempts",
            self.min_distance, self.max_attempts
        );
        Err(DelveError::GenerationFailed(
            "no sufficiently distant terminal pair exists".to_string(),
        ))
    }
}
