//! # Player
//!
//! The single treasure-hunting agent and its lifecycle.

use crate::{Coordinate, TreasureHoard};
use serde::Serialize;

/// A player that has been placed in a dungeon.
///
/// A `Player` value only comes into existence through
/// [`crate::Dungeon::add_player`], so it always stands on a valid cell. Its
/// location changes only through successful moves and its treasure only
/// through pickups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    location: Coordinate,
    treasure: TreasureHoard,
}

impl Player {
    pub(crate) fn new(location: Coordinate) -> Self {
        Self {
            location,
            treasure: TreasureHoard::default(),
        }
    }

    /// Current cell of the player.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Treasure collected so far.
    pub fn treasure(&self) -> TreasureHoard {
        self.treasure
    }

    pub(crate) fn set_location(&mut self, location: Coordinate) {
        self.location = location;
    }

    pub(crate) fn collect(&mut self, hoard: TreasureHoard) {
        self.treasure.add(hoard);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Location: {}\nTreasure: {}",
            self.location, self.treasure
        )
    }
}

/// Lifecycle of the player inside a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlayerSlot {
    /// No player has been created yet
    #[default]
    Uninitialized,
    /// A player exists but has not entered the dungeon
    Created,
    /// The player stands in the dungeon
    Placed(Player),
}

impl PlayerSlot {
    /// Short name of the lifecycle stage, for messages.
    pub fn stage(&self) -> &'static str {
        match self {
            PlayerSlot::Uninitialized => "uninitialized",
            PlayerSlot::Created => "created",
            PlayerSlot::Placed(_) => "placed",
        }
    }
}
