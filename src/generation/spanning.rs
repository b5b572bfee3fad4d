//! # Spanning Forest
//!
//! Randomized Kruskal over a disjoint set of cell indices, plus promotion of
//! redundant edges to add cycles.

use crate::{DelveError, DelveResult, Edge, GridShape, Randomizer};
use log::trace;

/// Index-based disjoint set with union by rank and path compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    classes: usize,
}

impl DisjointSet {
    /// Creates `size` singleton classes.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            classes: size,
        }
    }

    /// Representative of the class containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the classes of `x` and `y`. Returns `false` if they were
    /// already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.classes -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of distinct classes.
    pub fn class_count(&self) -> usize {
        self.classes
    }
}

/// The final edge set under construction and the pool of redundant edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    pool: Vec<Edge>,
}

impl SpanningForest {
    /// Grows a spanning tree by drawing candidates at random.
    ///
    /// Each draw takes `next_int(0, remaining)` and removes that candidate
    /// while keeping the order of the rest, so a recorded sequence of draws
    /// selects the same edges on replay. Edges that would close a cycle go to
    /// the pool in the order they are drawn.
    pub fn grow(
        shape: &GridShape,
        mut candidates: Vec<Edge>,
        rng: &mut dyn Randomizer,
    ) -> DelveResult<Self> {
        let cells = shape.cell_count();
        let mut sets = DisjointSet::new(cells);
        let mut edges = Vec::with_capacity(cells.saturating_sub(1));
        let mut pool = Vec::with_capacity(candidates.len());

        while !candidates.is_empty() {
            let index = rng.next_index(candidates.len())?;
            let edge = candidates.remove(index);
            let a = shape.index_of(edge.p1);
            let b = shape.index_of(edge.p2);

            if sets.union(a, b) {
                trace!("Tree edge {}", edge);
                edges.push(edge);
            } else {
                trace!("Pool edge {}", edge);
                pool.push(edge);
            }
        }

        if sets.class_count() != 1 || edges.len() + 1 != cells {
            return Err(DelveError::GenerationFailed(format!(
                "candidate edges left {} disconnected regions",
                sets.class_count()
            )));
        }

        Ok(Self { edges, pool })
    }

    /// Moves `degree` randomly chosen pool edges into the final edge set.
    ///
    /// Each promoted edge closes exactly one new cycle.
    pub fn apply_interconnectivity(
        &mut self,
        degree: usize,
        rng: &mut dyn Randomizer,
    ) -> DelveResult<()> {
        if degree > self.pool.len() {
            return Err(DelveError::InvalidConfig(format!(
                "interconnectivity {} exceeds the {} redundant edges available",
                degree,
                self.pool.len()
            )));
        }

        for _ in 0..degree {
            let index = rng.next_index(self.pool.len())?;
            let edge = self.pool.remove(index);
            trace!("Interconnect edge {}", edge);
            self.edges.push(edge);
        }
        Ok(())
    }

    /// Final edges chosen so far, tree edges first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Redundant edges not yet promoted.
    pub fn pool(&self) -> &[Edge] {
        &self.pool
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{candidate_edges, Coordinate, ReplayRandomizer, UniformRandomizer};

    #[test]
    fn test_disjoint_set_union_and_find() {
        let mut sets = DisjointSet::new(6);
        assert_eq!(sets.class_count(), 6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert!(sets.connected(0, 3));
        assert!(!sets.connected(0, 4));
        assert_eq!(sets.class_count(), 3);
    }

    #[test]
    fn test_grow_always_draws_first_candidate() {
        // Drawing index 0 every time processes candidates in enumeration order.
        let shape = GridShape::new(3, 3, false);
        let candidates = candidate_edges(&shape).unwrap();
        let mut rng = ReplayRandomizer::new(vec![0; candidates.len()]);

        let forest = SpanningForest::grow(&shape, candidates, &mut rng).unwrap();
        assert!(rng.is_exhausted());
        assert_eq!(forest.edges().len(), 8);
        assert_eq!(forest.pool().len(), 4);

        // All six horizontal edges join distinct rows, then the first column
        // of vertical edges connects the rows; the rest are redundant.
        let wire: Vec<String> = forest.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            wire,
            vec!["00-01", "01-02", "10-11", "11-12", "20-21", "21-22", "00-10", "10-20"]
        );
        assert_eq!(forest.pool()[0].to_string(), "01-11");
    }

    #[test]
    fn test_grow_preserves_order_on_removal() {
        let shape = GridShape::new(3, 3, false);
        let candidates = candidate_edges(&shape).unwrap();
        // Last candidate first, then the front of the shifted list.
        let mut values = vec![11];
        values.extend(vec![0; 11]);
        let mut rng = ReplayRandomizer::new(values);

        let forest = SpanningForest::grow(&shape, candidates, &mut rng).unwrap();
        assert_eq!(
            forest.edges()[0],
            Edge::new(Coordinate::new(1, 2), Coordinate::new(2, 2))
        );
        assert_eq!(forest.edges()[1].to_string(), "00-01");
    }

    #[test]
    fn test_interconnectivity_moves_pool_edges() {
        let shape = GridShape::new(4, 4, true);
        let candidates = candidate_edges(&shape).unwrap();
        let mut rng = UniformRandomizer::seeded(5);
        let mut forest = SpanningForest::grow(&shape, candidates, &mut rng).unwrap();
        assert_eq!(forest.edges().len(), 15);
        assert_eq!(forest.pool().len(), 17);

        let mut replay = ReplayRandomizer::new([16, 0, 3]);
        let last = forest.pool()[16];
        let first = forest.pool()[0];
        forest.apply_interconnectivity(3, &mut replay).unwrap();

        assert_eq!(forest.edges().len(), 18);
        assert_eq!(forest.pool().len(), 14);
        assert_eq!(forest.edges()[15], last);
        assert_eq!(forest.edges()[16], first);
    }

    #[test]
    fn test_interconnectivity_beyond_pool_is_rejected() {
        let shape = GridShape::new(3, 3, false);
        let candidates = candidate_edges(&shape).unwrap();
        let mut rng = UniformRandomizer::seeded(1);
        let mut forest = SpanningForest::grow(&shape, candidates, &mut rng).unwrap();
        assert!(matches!(
            forest.apply_interconnectivity(5, &mut rng),
            Err(DelveError::InvalidConfig(_))
        ));
    }
}
