//! # Rendering Module
//!
//! Plain-text rendering of a dungeon for terminals.

pub mod display;

pub use display::*;
