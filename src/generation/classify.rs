//! # Cave Classification
//!
//! Opens the doors implied by the final edge set and builds one [`Cave`] per
//! cell.

use crate::{Cave, DelveError, DelveResult, Doors, Edge, GridShape};
use log::debug;

/// Builds every cell of `shape`, row-major, with doors matching `edges`.
///
/// For each edge the door toward the other endpoint is opened on both
/// sides, wrap included, whichever way round the edge is stored. Cells with
/// exactly two open doors become tunnels.
pub fn classify_caves(shape: &GridShape, edges: &[Edge]) -> DelveResult<Vec<Cave>> {
    let mut doors = vec![Doors::closed(); shape.cell_count()];

    for edge in edges {
        let direction = shape.direction_between(edge.p1, edge.p2).ok_or_else(|| {
            DelveError::GenerationFailed(format!("edge {} does not join adjacent cells", edge))
        })?;
        doors[shape.index_of(edge.p1)].open(direction);
        doors[shape.index_of(edge.p2)].open(direction.opposite());
    }

    let caves: Vec<Cave> = shape
        .coordinates()
        .zip(doors)
        .map(|(location, doors)| Cave::new(location, doors))
        .collect();

    let tunnels = caves.iter().filter(|cave| cave.is_tunnel()).count();
    debug!(
        "Classified {} caves and {} tunnels",
        caves.len() - tunnels,
        tunnels
    );
    Ok(caves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellKind, Coordinate, Direction};

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_doors_are_symmetric() {
        let shape = GridShape::new(3, 3, false);
        let edges = vec![
            Edge::new(c(0, 0), c(0, 1)),
            Edge::new(c(1, 1), c(0, 1)),
            Edge::new(c(1, 1), c(1, 2)),
        ];
        let caves = classify_caves(&shape, &edges).unwrap();

        assert_eq!(caves.len(), 9);
        assert_eq!(caves[0].doors().open_directions(), vec![Direction::East]);
        assert_eq!(
            caves[1].doors().open_directions(),
            vec![Direction::South, Direction::West]
        );
        assert_eq!(
            caves[4].doors().open_directions(),
            vec![Direction::North, Direction::East]
        );
        assert_eq!(caves[5].doors().open_directions(), vec![Direction::West]);
        assert_eq!(caves[1].kind(), CellKind::Tunnel);
        assert_eq!(caves[8].kind(), CellKind::Cave);
    }

    #[test]
    fn test_wrapped_edges_open_border_doors() {
        let shape = GridShape::new(3, 4, true);
        let edges = vec![Edge::new(c(1, 3), c(1, 0)), Edge::new(c(0, 2), c(2, 2))];
        let caves = classify_caves(&shape, &edges).unwrap();

        let at = |coord: Coordinate| &caves[shape.index_of(coord)];
        assert!(at(c(1, 3)).can_move(Direction::East));
        assert!(at(c(1, 0)).can_move(Direction::West));
        assert!(at(c(0, 2)).can_move(Direction::North));
        assert!(at(c(2, 2)).can_move(Direction::South));
    }

    #[test]
    fn test_rejects_non_adjacent_edge() {
        let shape = GridShape::new(3, 3, false);
        let edges = vec![Edge::new(c(0, 0), c(2, 2))];
        assert!(matches!(
            classify_caves(&shape, &edges),
            Err(DelveError::GenerationFailed(_))
        ));
    }
}
