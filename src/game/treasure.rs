//! # Treasure
//!
//! The three kinds of treasure found in caves and the hoard that counts them.

use crate::{config, DelveResult, Randomizer};
use serde::{Deserialize, Serialize};

/// Kinds of treasure a cave can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureKind {
    Diamonds,
    Sapphires,
    Rubies,
}

impl TreasureKind {
    /// All treasure kinds, in the order quantities are drawn.
    pub const ALL: [TreasureKind; 3] = [
        TreasureKind::Diamonds,
        TreasureKind::Sapphires,
        TreasureKind::Rubies,
    ];

    /// Display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TreasureKind::Diamonds => "Diamonds",
            TreasureKind::Sapphires => "Sapphires",
            TreasureKind::Rubies => "Rubies",
        }
    }

    /// Draws a quantity in `[0, MAX_TREASURE_QUANTITY)`.
    pub fn random_quantity(self, rng: &mut dyn Randomizer) -> DelveResult<u32> {
        let quantity = rng.next_int(0, config::MAX_TREASURE_QUANTITY)?;
        Ok(quantity as u32)
    }
}

impl std::fmt::Display for TreasureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of each treasure kind, held by a cave or collected by a player.
///
/// # Examples
///
/// ```
/// use delve::{TreasureHoard, TreasureKind};
///
/// let mut hoard = TreasureHoard::new(1, 2, 3);
/// assert_eq!(hoard.get(TreasureKind::Sapphires), 2);
/// assert_eq!(hoard.total(), 6);
///
/// let taken = hoard.take();
/// assert_eq!(taken.total(), 6);
/// assert!(hoard.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureHoard {
    pub diamonds: u32,
    pub sapphires: u32,
    pub rubies: u32,
}

impl TreasureHoard {
    /// Creates a hoard with the given counts.
    pub fn new(diamonds: u32, sapphires: u32, rubies: u32) -> Self {
        Self {
            diamonds,
            sapphires,
            rubies,
        }
    }

    /// Draws one independent quantity per kind, diamonds first.
    pub fn roll(rng: &mut dyn Randomizer) -> DelveResult<Self> {
        let mut hoard = Self::default();
        for kind in TreasureKind::ALL {
            *hoard.get_mut(kind) = kind.random_quantity(rng)?;
        }
        Ok(hoard)
    }

    /// Count of a single kind.
    pub fn get(&self, kind: TreasureKind) -> u32 {
        match kind {
            TreasureKind::Diamonds => self.diamonds,
            TreasureKind::Sapphires => self.sapphires,
            TreasureKind::Rubies => self.rubies,
        }
    }

    fn get_mut(&mut self, kind: TreasureKind) -> &mut u32 {
        match kind {
            TreasureKind::Diamonds => &mut self.diamonds,
            TreasureKind::Sapphires => &mut self.sapphires,
            TreasureKind::Rubies => &mut self.rubies,
        }
    }

    /// Adds another hoard's counts to this one.
    pub fn add(&mut self, other: TreasureHoard) {
        for kind in TreasureKind::ALL {
            *self.get_mut(kind) += other.get(kind);
        }
    }

    /// Moves every count out of this hoard, leaving it empty.
    pub fn take(&mut self) -> TreasureHoard {
        std::mem::take(self)
    }

    /// Sum over all kinds.
    pub fn total(&self) -> u32 {
        TreasureKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }

    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for TreasureHoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = TreasureKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}", kind, self.get(kind)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
