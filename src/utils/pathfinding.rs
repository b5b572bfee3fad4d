//! # Pathfinding
//!
//! Breadth-first search over the dungeon's passages.

use crate::{Coordinate, Edge, GridShape};
use std::collections::VecDeque;

/// Undirected adjacency lists over row-major cell indices.
///
/// Built once from an edge list so repeated searches do not rescan the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    shape: Option<GridShape>,
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds adjacency lists for every cell of `shape` from `edges`.
    ///
    /// Edges with an endpoint outside the grid are ignored.
    pub fn from_edges(shape: &GridShape, edges: &[Edge]) -> Self {
        let mut neighbors = vec![Vec::new(); shape.cell_count()];
        for edge in edges {
            if !shape.contains(edge.p1) || !shape.contains(edge.p2) {
                continue;
            }
            let a = shape.index_of(edge.p1);
            let b = shape.index_of(edge.p2);
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
        Self {
            shape: Some(*shape),
            neighbors,
        }
    }

    /// Cells directly joined to `coord`.
    pub fn neighbors_of(&self, coord: Coordinate) -> Vec<Coordinate> {
        match self.index(coord) {
            Some(index) => self.neighbors[index]
                .iter()
                .map(|&n| self.coordinate(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Shortest path length between two cells, counted in moves.
    ///
    /// Returns `Some(0)` when `from == to` and `None` when `to` cannot be
    /// reached (or either cell is off the grid).
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> Option<usize> {
        let source = self.index(from)?;
        let target = self.index(to)?;
        if source == target {
            return Some(0);
        }

        let mut visited = vec![false; self.neighbors.len()];
        let mut frontier = VecDeque::new();
        visited[source] = true;
        frontier.push_back((source, 0usize));

        while let Some((current, distance)) = frontier.pop_front() {
            for &next in &self.neighbors[current] {
                if visited[next] {
                    continue;
                }
                if next == target {
                    return Some(distance + 1);
                }
                visited[next] = true;
                frontier.push_back((next, distance + 1));
            }
        }

        None
    }

    /// Number of cells reachable from `from`, including itself.
    pub fn reachable_count(&self, from: Coordinate) -> usize {
        let Some(source) = self.index(from) else {
            return 0;
        };

        let mut visited = vec![false; self.neighbors.len()];
        let mut frontier = VecDeque::from([source]);
        visited[source] = true;
        let mut count = 1;

        while let Some(current) = frontier.pop_front() {
            for &next in &self.neighbors[current] {
                if !visited[next] {
                    visited[next] = true;
                    count += 1;
                    frontier.push_back(next);
                }
            }
        }

        count
    }

    /// Checks if every cell can reach every other cell.
    pub fn is_connected(&self) -> bool {
        match self.shape {
            Some(shape) if shape.cell_count() > 0 => {
                self.reachable_count(Coordinate::origin()) == shape.cell_count()
            }
            _ => true,
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let shape = self.shape?;
        shape.contains(coord).then(|| shape.index_of(coord))
    }

    fn coordinate(&self, index: usize) -> Coordinate {
        match self.shape {
            Some(shape) => shape.coordinate_at(index),
            None => Coordinate::origin(),
        }
    }
}

/// Shortest path length between two cells over `edges`.
///
/// Convenience wrapper for one-off searches; build an [`Adjacency`] when
/// searching repeatedly over the same edges.
pub fn shortest_path_length(
    shape: &GridShape,
    edges: &[Edge],
    from: Coordinate,
    to: Coordinate,
) -> Option<usize> {
    Adjacency::from_edges(shape, edges).distance(from, to)
}
