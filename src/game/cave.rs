//! # Caves and Tunnels
//!
//! A cell of the dungeon grid with its four doors and its treasure. Cells with
//! exactly two open doors are tunnels and never hold treasure.

use crate::{Coordinate, Direction, TreasureHoard};
use serde::{Deserialize, Serialize};

/// Open/closed state of the four doors of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doors {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Doors {
    /// Creates a door set with all doors closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Checks if the door in `direction` is open.
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Opens the door in `direction`.
    pub fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::East => self.east = true,
            Direction::South => self.south = true,
            Direction::West => self.west = true,
        }
    }

    /// Number of open doors.
    pub fn open_count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.is_open(direction))
            .count()
    }

    /// Open directions in North, East, South, West order.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_open(direction))
            .collect()
    }
}

/// Classification of a cell by its door count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Any cell without exactly two open doors; may hold treasure
    Cave,
    /// A pass-through cell with exactly two open doors
    Tunnel,
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKind::Cave => f.write_str("Cave"),
            CellKind::Tunnel => f.write_str("Tunnel"),
        }
    }
}

/// A single dungeon cell: its location, doors and current treasure.
///
/// # Examples
///
/// ```
/// use delve::{Cave, CellKind, Coordinate, Direction, Doors};
///
/// let mut doors = Doors::closed();
/// doors.open(Direction::North);
/// doors.open(Direction::South);
///
/// let cave = Cave::new(Coordinate::new(1, 1), doors);
/// assert_eq!(cave.kind(), CellKind::Tunnel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cave {
    location: Coordinate,
    doors: Doors,
    treasure: TreasureHoard,
}

impl Cave {
    /// Creates an empty cell with the given doors.
    pub fn new(location: Coordinate, doors: Doors) -> Self {
        Self {
            location,
            doors,
            treasure: TreasureHoard::default(),
        }
    }

    /// Coordinate of this cell.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Door flags of this cell.
    pub fn doors(&self) -> &Doors {
        &self.doors
    }

    /// Treasure currently held by this cell.
    pub fn treasure(&self) -> TreasureHoard {
        self.treasure
    }

    /// Cave or Tunnel, derived from the open door count.
    pub fn kind(&self) -> CellKind {
        if self.doors.open_count() == 2 {
            CellKind::Tunnel
        } else {
            CellKind::Cave
        }
    }

    /// Checks if exactly two doors are open.
    pub fn is_tunnel(&self) -> bool {
        self.kind() == CellKind::Tunnel
    }

    /// Checks if the door in `direction` is open.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.doors.is_open(direction)
    }

    /// Places treasure in the cell. Tunnels refuse it and return `false`.
    pub(crate) fn stock(&mut self, hoard: TreasureHoard) -> bool {
        if self.is_tunnel() {
            return false;
        }
        self.treasure = hoard;
        true
    }

    /// Removes and returns all treasure in the cell.
    pub(crate) fn take_treasure(&mut self) -> TreasureHoard {
        self.treasure.take()
    }
}
