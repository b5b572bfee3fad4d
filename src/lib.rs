//! # Delve
//!
//! Randomized cave dungeon generation with a single treasure-hunting player.
//!
//! ## Architecture Overview
//!
//! Delve is split into a construction pipeline and a traversal engine:
//!
//! - **Random Sources**: Injected [`Randomizer`] capability with a uniform and a replay variant
//! - **Generation**: Topology, randomized spanning tree, interconnectivity, cave
//!   classification, terminal selection and treasure distribution
//! - **Game**: The frozen [`Dungeon`] graph, the [`Player`] record and the
//!   [`DungeonGame`] model that enforces the player lifecycle
//! - **Rendering**: Plain-text map of a dungeon for terminals
//! - **Input**: Parsing of textual player commands
//!
//! ## Determinism
//!
//! Every random decision is drawn from a `&mut dyn Randomizer` passed in by the
//! caller, in a fixed call order. Feeding a [`ReplayRandomizer`] with a recorded
//! sequence therefore rebuilds the exact same dungeon.

pub mod game;
pub mod generation;
pub mod input;
pub mod random;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use random::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Delve engine.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Construction parameters are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation could not satisfy its constraints
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A random draw was requested over an invalid range
    #[error("Invalid random range: [{min}, {max})")]
    InvalidRange { min: usize, max: usize },

    /// A replay randomizer ran out of recorded values
    #[error("Replay sequence exhausted after {consumed} values")]
    ReplayExhausted { consumed: usize },

    /// A replay randomizer held a value outside the requested range
    #[error("Replay value {value} is outside the requested range [{min}, {max})")]
    ReplayOutOfRange { value: usize, min: usize, max: usize },

    /// Operation is not allowed in the current game state
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Coordinate lies outside the dungeon grid
    #[error("Invalid location: {0}")]
    InvalidLocation(Coordinate),

    /// Textual input could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Smallest allowed row or column count
    pub const MIN_DIMENSION: usize = 3;

    /// Minimum shortest-path distance between start and end
    pub const MIN_TERMINAL_DISTANCE: usize = 5;

    /// Number of random start draws before terminal selection gives up
    pub const MAX_TERMINAL_ATTEMPTS: usize = 50;

    /// Exclusive upper bound of a single treasure quantity
    pub const MAX_TREASURE_QUANTITY: usize = 10;

    /// Highest treasure percentage accepted by the configuration
    pub const MAX_TREASURE_PERCENT: u32 = 100;
}
