//! # Game Module
//!
//! Core dungeon representation, player record and traversal rules.
//!
//! This module contains the fundamental building blocks of a Delve game:
//! - Grid geometry with optional wraparound
//! - Caves, tunnels and the edges that join them
//! - Treasure kinds and hoards
//! - The frozen dungeon graph and the player lifecycle

pub mod cave;
pub mod dungeon;
pub mod edge;
pub mod player;
pub mod state;
pub mod treasure;

pub use cave::*;
pub use dungeon::*;
pub use edge::*;
pub use player::*;
pub use state::*;
pub use treasure::*;

use crate::{DelveError, DelveResult, Randomizer};
use serde::{Deserialize, Serialize};

/// Represents a cell position in the dungeon grid as `(row, col)`.
///
/// # Examples
///
/// ```
/// use delve::Coordinate;
///
/// let coord = Coordinate::new(2, 3);
/// assert_eq!(coord.row, 2);
/// assert_eq!(coord.col, 3);
/// assert_eq!(coord.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the origin coordinate (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Cardinal directions a player can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in door order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::West.opposite(), Direction::East);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Human-readable name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    /// Maps the 1-based menu number (1 = North .. 4 = West) to a direction.
    pub fn from_ordinal(ordinal: usize) -> Option<Direction> {
        match ordinal {
            1..=4 => Some(Self::ALL[ordinal - 1]),
            _ => None,
        }
    }

    /// Draws a uniformly random direction.
    ///
    /// Consumes exactly one value in `[1, 5)` from the randomizer.
    pub fn random(rng: &mut dyn Randomizer) -> DelveResult<Direction> {
        let ordinal = rng.next_int(1, 5)?;
        Self::from_ordinal(ordinal).ok_or(DelveError::InvalidRange { min: 1, max: 5 })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensions of the dungeon grid and whether its borders wrap around.
///
/// With wrapping enabled the grid is a torus: the last column is adjacent to
/// the first and the last row to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
    pub wrapping: bool,
}

impl GridShape {
    /// Creates a new grid shape.
    pub fn new(rows: usize, cols: usize, wrapping: bool) -> Self {
        Self {
            rows,
            cols,
            wrapping,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks if a coordinate lies inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of a coordinate.
    pub fn index_of(&self, coord: Coordinate) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Coordinate at a row-major index.
    pub fn coordinate_at(&self, index: usize) -> Coordinate {
        Coordinate::new(index / self.cols, index % self.cols)
    }

    /// Iterates all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |index| Coordinate::new(index / cols, index % cols))
    }

    /// Returns the neighbouring coordinate one step in `direction`.
    ///
    /// Steps off the border wrap to the opposite edge on that axis only when
    /// wrapping is enabled; otherwise there is no neighbour.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Coordinate, Direction, GridShape};
    ///
    /// let torus = GridShape::new(4, 5, true);
    /// assert_eq!(
    ///     torus.neighbor(Coordinate::new(0, 2), Direction::North),
    ///     Some(Coordinate::new(3, 2))
    /// );
    ///
    /// let flat = GridShape::new(4, 5, false);
    /// assert_eq!(flat.neighbor(Coordinate::new(0, 2), Direction::North), None);
    /// ```
    pub fn neighbor(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        if !self.contains(coord) {
            return None;
        }
        let Coordinate { row, col } = coord;

        let (row, col) = match direction {
            Direction::North if row > 0 => (row - 1, col),
            Direction::North if self.wrapping => (self.rows - 1, col),
            Direction::South if row + 1 < self.rows => (row + 1, col),
            Direction::South if self.wrapping => (0, col),
            Direction::West if col > 0 => (row, col - 1),
            Direction::West if self.wrapping => (row, self.cols - 1),
            Direction::East if col + 1 < self.cols => (row, col + 1),
            Direction::East if self.wrapping => (row, 0),
            _ => return None,
        };
        Some(Coordinate::new(row, col))
    }

    /// Finds the direction that leads from `from` to the adjacent cell `to`.
    pub fn direction_between(&self, from: Coordinate, to: Coordinate) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(from, direction) == Some(to))
    }
}
