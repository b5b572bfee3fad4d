//! # Dungeon Edges
//!
//! Undirected passages between two adjacent cells, and their compact
//! `"<row><col>-<row><col>"` text form.

use crate::{Coordinate, DelveError};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An undirected passage between two grid-adjacent cells.
///
/// Equality and hashing ignore endpoint order, so `(a, b)` and `(b, a)` are the
/// same edge. The stored orientation is only kept for display.
///
/// # Examples
///
/// ```
/// use delve::{Coordinate, Edge};
///
/// let edge = Edge::new(Coordinate::new(0, 1), Coordinate::new(1, 1));
/// assert_eq!(edge, Edge::new(Coordinate::new(1, 1), Coordinate::new(0, 1)));
/// assert_eq!(edge.to_string(), "01-11");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub p1: Coordinate,
    pub p2: Coordinate,
}

impl Edge {
    /// Creates an edge between two cells.
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Self { p1, p2 }
    }

    /// Checks if the edge touches a cell.
    pub fn touches(&self, coord: Coordinate) -> bool {
        self.p1 == coord || self.p2 == coord
    }

    /// Returns the endpoint opposite `coord`, if `coord` is an endpoint.
    pub fn other(&self, coord: Coordinate) -> Option<Coordinate> {
        if self.p1 == coord {
            Some(self.p2)
        } else if self.p2 == coord {
            Some(self.p1)
        } else {
            None
        }
    }

    /// Endpoints ordered so that the smaller coordinate comes first.
    fn normalized(&self) -> (Coordinate, Coordinate) {
        if self.p1 <= self.p2 {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// Wire format: each component is written as a bare decimal number, so the
/// text is only unambiguous while every row and column is below 10.
impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}-{}{}",
            self.p1.row, self.p1.col, self.p2.row, self.p2.col
        )
    }
}

impl FromStr for Edge {
    type Err = DelveError;

    /// Parses the `"<row><col>-<row><col>"` form with single-digit components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DelveError::InvalidInput(format!("malformed edge '{}'", s));

        let (left, right) = s.trim().split_once('-').ok_or_else(invalid)?;
        let parse_cell = |text: &str| -> Option<Coordinate> {
            let mut digits = text.chars().map(|c| c.to_digit(10));
            match (digits.next(), digits.next(), digits.next()) {
                (Some(Some(row)), Some(Some(col)), None) => {
                    Some(Coordinate::new(row as usize, col as usize))
                }
                _ => None,
            }
        };

        let p1 = parse_cell(left).ok_or_else(invalid)?;
        let p2 = parse_cell(right).ok_or_else(invalid)?;
        Ok(Edge::new(p1, p2))
    }
}
