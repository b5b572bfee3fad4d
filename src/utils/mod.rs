//! # Utilities Module
//!
//! Graph search helpers shared by generation and gameplay.

pub mod pathfinding;

pub use pathfinding::*;
