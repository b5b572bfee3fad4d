//! # Topology
//!
//! Enumeration of every adjacency edge a grid can hold.

use crate::{config, DelveError, DelveResult, Direction, Edge, GridShape};

/// Lists every candidate edge of `shape`.
///
/// Horizontal edges come first, one per cell in row-major order joining the
/// cell to its east neighbour. Vertical edges follow, one per cell joining it
/// to its south neighbour. Without wrapping the last column and last row
/// contribute nothing; with wrapping they join back to column 0 and row 0.
/// Each edge is stored as `(cell, neighbour)`.
///
/// # Examples
///
/// ```
/// use delve::{candidate_edges, GridShape};
///
/// let flat = candidate_edges(&GridShape::new(3, 4, false)).unwrap();
/// assert_eq!(flat.len(), 2 * 12 - 3 - 4);
///
/// let torus = candidate_edges(&GridShape::new(3, 4, true)).unwrap();
/// assert_eq!(torus.len(), 2 * 12);
/// ```
pub fn candidate_edges(shape: &GridShape) -> DelveResult<Vec<Edge>> {
    if shape.rows < config::MIN_DIMENSION || shape.cols < config::MIN_DIMENSION {
        return Err(DelveError::InvalidConfig(format!(
            "grid must be at least {}x{}, got {}x{}",
            config::MIN_DIMENSION,
            config::MIN_DIMENSION,
            shape.rows,
            shape.cols
        )));
    }

    let mut edges = Vec::with_capacity(2 * shape.cell_count());
    for direction in [Direction::East, Direction::South] {
        edges.extend(shape.coordinates().filter_map(|cell| {
            shape
                .neighbor(cell, direction)
                .map(|neighbour| Edge::new(cell, neighbour))
        }));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;
    use std::collections::HashSet;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_flat_order_is_horizontal_then_vertical() {
        let edges = candidate_edges(&GridShape::new(3, 3, false)).unwrap();
        let expected = vec![
            Edge::new(c(0, 0), c(0, 1)),
            Edge::new(c(0, 1), c(0, 2)),
            Edge::new(c(1, 0), c(1, 1)),
            Edge::new(c(1, 1), c(1, 2)),
            Edge::new(c(2, 0), c(2, 1)),
            Edge::new(c(2, 1), c(2, 2)),
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(0, 1), c(1, 1)),
            Edge::new(c(0, 2), c(1, 2)),
            Edge::new(c(1, 0), c(2, 0)),
            Edge::new(c(1, 1), c(2, 1)),
            Edge::new(c(1, 2), c(2, 2)),
        ];
        assert_eq!(edges, expected);
        // Orientation is part of the order, not just the set.
        assert!(edges
            .iter()
            .zip(&expected)
            .all(|(a, b)| a.p1 == b.p1 && a.p2 == b.p2));
    }

    #[test]
    fn test_wrapped_edges_join_last_to_first() {
        let edges = candidate_edges(&GridShape::new(3, 3, true)).unwrap();
        assert_eq!(edges.len(), 18);
        assert_eq!(edges[2].to_string(), "02-00");
        assert_eq!(edges[9 + 6].to_string(), "20-00");
    }

    #[test]
    fn test_no_duplicates() {
        for wrapping in [false, true] {
            let shape = GridShape::new(4, 6, wrapping);
            let edges = candidate_edges(&shape).unwrap();
            let unique: HashSet<Edge> = edges.iter().copied().collect();
            assert_eq!(unique.len(), edges.len());
        }
    }

    #[test]
    fn test_rejects_small_grids() {
        assert!(candidate_edges(&GridShape::new(2, 5, false)).is_err());
        assert!(candidate_edges(&GridShape::new(5, 2, true)).is_err());
    }
}
