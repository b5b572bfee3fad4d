//! # Generation Module
//!
//! The dungeon construction pipeline.
//!
//! Construction runs once, in a fixed order, and every random decision is
//! drawn from the injected randomizers:
//!
//! 1. [`candidate_edges`] enumerates every adjacency of the grid
//! 2. [`SpanningForest::grow`] builds a randomized spanning tree and a pool of
//!    redundant edges
//! 3. [`SpanningForest::apply_interconnectivity`] promotes pool edges
//! 4. [`classify_caves`] opens doors and tells caves from tunnels
//! 5. [`TerminalSelector`] picks a distant start and end
//! 6. [`assign_treasure`] stocks a percentage of the caves

pub mod classify;
pub mod distribution;
pub mod spanning;
pub mod terminals;
pub mod topology;

pub use classify::*;
pub use distribution::*;
pub use spanning::*;
pub use terminals::*;
pub use topology::*;

use crate::{config, Adjacency, DelveError, DelveResult, Dungeon, GridShape, Randomizer};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Construction parameters for a dungeon.
///
/// # Examples
///
/// ```
/// use delve::DungeonConfig;
///
/// let config = DungeonConfig::new(5, 5)
///     .with_interconnectivity(6)
///     .with_treasure_percent(40);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_interconnectivity(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of rows, at least 3
    pub rows: usize,
    /// Number of columns, at least 3
    pub cols: usize,
    /// Redundant edges added on top of the spanning tree
    pub interconnectivity: usize,
    /// Whether the borders wrap around
    pub wrapping: bool,
    /// Percentage of caves that receive treasure (0 to 100)
    pub treasure_percent: u32,
}

impl DungeonConfig {
    /// Creates a configuration with no interconnectivity, no wrapping and
    /// the default treasure percentage.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            interconnectivity: 0,
            wrapping: false,
            treasure_percent: 25,
        }
    }

    /// Creates a configuration for testing with a small, well-connected grid.
    pub fn for_testing() -> Self {
        Self {
            rows: 5,
            cols: 5,
            interconnectivity: 2,
            wrapping: false,
            treasure_percent: 50,
        }
    }

    /// Sets the number of redundant edges.
    pub fn with_interconnectivity(mut self, interconnectivity: usize) -> Self {
        self.interconnectivity = interconnectivity;
        self
    }

    /// Sets whether the borders wrap around.
    pub fn with_wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Sets the percentage of caves that receive treasure.
    pub fn with_treasure_percent(mut self, treasure_percent: u32) -> Self {
        self.treasure_percent = treasure_percent;
        self
    }

    /// Grid shape described by this configuration.
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols, self.wrapping)
    }

    /// Number of candidate edges: `2RC - R - C` flat, `2RC` wrapped.
    pub fn candidate_edge_count(&self) -> usize {
        let cells = self.rows * self.cols;
        if self.wrapping {
            2 * cells
        } else {
            (2 * cells).saturating_sub(self.rows + self.cols)
        }
    }

    /// Largest interconnectivity the grid supports: every candidate edge that
    /// is not part of the spanning tree.
    pub fn max_interconnectivity(&self) -> usize {
        let tree_edges = (self.rows * self.cols).saturating_sub(1);
        self.candidate_edge_count().saturating_sub(tree_edges)
    }

    /// Checks every rule and reports the first violation.
    pub fn validate(&self) -> DelveResult<()> {
        if self.rows < config::MIN_DIMENSION || self.cols < config::MIN_DIMENSION {
            return Err(DelveError::InvalidConfig(format!(
                "dungeon must be at least {}x{}, got {}x{}",
                config::MIN_DIMENSION,
                config::MIN_DIMENSION,
                self.rows,
                self.cols
            )));
        }

        let max = self.max_interconnectivity();
        if self.interconnectivity > max {
            return Err(DelveError::InvalidConfig(format!(
                "interconnectivity {} exceeds the maximum of {} for this grid",
                self.interconnectivity, max
            )));
        }

        if self.treasure_percent > config::MAX_TREASURE_PERCENT {
            return Err(DelveError::InvalidConfig(format!(
                "treasure percentage {} is outside 0..={}",
                self.treasure_percent,
                config::MAX_TREASURE_PERCENT
            )));
        }

        Ok(())
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::new(6, 8).with_interconnectivity(4)
    }
}

/// Trait for procedural generators.
///
/// Layout decisions come from `rng`; treasure quantities come from
/// `treasure_rng` so that a recorded layout sequence can be replayed
/// independently of the quantities.
pub trait Generator<T> {
    /// Generates content for `config`.
    fn generate(
        &self,
        config: &DungeonConfig,
        rng: &mut dyn Randomizer,
        treasure_rng: &mut dyn Randomizer,
    ) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &DungeonConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Randomized Kruskal dungeon generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonGenerator {
    pub terminals: TerminalSelector,
}

impl DungeonGenerator {
    /// Creates a generator with the default terminal selection rules.
    pub fn new() -> Self {
        Self {
            terminals: TerminalSelector::default(),
        }
    }
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<Dungeon> for DungeonGenerator {
    fn generate(
        &self,
        config: &DungeonConfig,
        rng: &mut dyn Randomizer,
        treasure_rng: &mut dyn Randomizer,
    ) -> DelveResult<Dungeon> {
        config.validate()?;
        let shape = config.shape();

        let candidates = candidate_edges(&shape)?;
        debug!("Enumerated {} candidate edges", candidates.len());

        let mut forest = SpanningForest::grow(&shape, candidates, rng)?;
        debug!(
            "Spanning tree has {} edges, {} left in the pool",
            forest.edges().len(),
            forest.pool().len()
        );
        forest.apply_interconnectivity(config.interconnectivity, rng)?;
        let edges = forest.into_edges();

        let mut caves = classify_caves(&shape, &edges)?;
        let adjacency = Adjacency::from_edges(&shape, &edges);
        let (start, end) = self.terminals.select(&shape, &caves, &adjacency, rng)?;
        assign_treasure(&mut caves, config.treasure_percent, rng, treasure_rng)?;

        let dungeon = Dungeon::from_parts(shape, caves, edges, start, end);
        info!(
            "Generated {}x{} dungeon{} with {} edges, start {} end {}",
            dungeon.rows(),
            dungeon.cols(),
            if dungeon.is_wrapping() { " (wrapping)" } else { "" },
            dungeon.edges().len(),
            start,
            end
        );
        Ok(dungeon)
    }

    fn validate(&self, dungeon: &Dungeon, config: &DungeonConfig) -> DelveResult<()> {
        let failed = |reason: String| Err(DelveError::GenerationFailed(reason));

        let cells = config.rows * config.cols;
        if dungeon.caves().len() != cells {
            return failed(format!(
                "expected {} cells, found {}",
                cells,
                dungeon.caves().len()
            ));
        }

        let expected_edges = cells - 1 + config.interconnectivity;
        if dungeon.edges().len() != expected_edges {
            return failed(format!(
                "expected {} edges, found {}",
                expected_edges,
                dungeon.edges().len()
            ));
        }

        if !dungeon.is_connected() {
            return failed("dungeon is not connected".to_string());
        }

        if let Some(tunnel) = dungeon
            .caves()
            .iter()
            .find(|cave| cave.is_tunnel() && !cave.treasure().is_empty())
        {
            return failed(format!("tunnel {} holds treasure", tunnel.location()));
        }

        let (start, end) = (dungeon.start(), dungeon.end());
        if start == end || dungeon.cave(start)?.is_tunnel() || dungeon.cave(end)?.is_tunnel() {
            return failed(format!("invalid terminals {} and {}", start, end));
        }

        match dungeon.distance(start, end) {
            Some(distance) if distance >= self.terminals.min_distance => Ok(()),
            distance => failed(format!(
                "terminals {} and {} are {:?} apart",
                start, end, distance
            )),
        }
    }

    fn generator_type(&self) -> &'static str {
        "randomized-kruskal"
    }
}
