//! # Game State Module
//!
//! The game model that owns a generated dungeon and the player lifecycle.
//!
//! [`DungeonGame`] is the primary interface for drivers: it builds the
//! dungeon, creates and places the player, and mediates every move and pickup.
//! Operations that need a player fail with [`DelveError::InvalidState`] until
//! the player has been created and placed.

use crate::{
    Coordinate, DelveError, DelveResult, Direction, Dungeon, DungeonConfig, MoveOutcome, Player,
    PlayerSlot, Randomizer, TreasureHoard,
};
use serde::{Deserialize, Serialize};

/// Outcome of a random walk through the dungeon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
    /// Number of moves attempted, blocked ones included
    pub steps: usize,
    /// Number of moves that hit a closed door
    pub blocked: usize,
    /// Whether the walk stopped on the end cell
    pub reached_end: bool,
}

/// A single game: one dungeon and at most one player.
///
/// # Examples
///
/// ```
/// use delve::{DungeonConfig, DungeonGame, UniformRandomizer};
///
/// let config = DungeonConfig::for_testing();
/// let mut rng = UniformRandomizer::seeded(11);
/// let mut treasure_rng = UniformRandomizer::seeded(12);
///
/// if let Ok(mut game) = DungeonGame::new(&config, &mut rng, &mut treasure_rng) {
///     game.create_player().unwrap();
///     game.add_player_to_dungeon().unwrap();
///     assert_eq!(game.player_location().unwrap(), game.start());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DungeonGame {
    dungeon: Dungeon,
    player: PlayerSlot,
}

impl DungeonGame {
    /// Generates a dungeon for `config` and wraps it in a new game.
    pub fn new(
        config: &DungeonConfig,
        rng: &mut dyn Randomizer,
        treasure_rng: &mut dyn Randomizer,
    ) -> DelveResult<Self> {
        let dungeon = Dungeon::generate(config, rng, treasure_rng)?;
        Ok(Self::from_dungeon(dungeon))
    }

    /// Starts a game on an already generated dungeon.
    pub fn from_dungeon(dungeon: Dungeon) -> Self {
        Self {
            dungeon,
            player: PlayerSlot::Uninitialized,
        }
    }

    /// The dungeon being played.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Start cave of the dungeon.
    pub fn start(&self) -> Coordinate {
        self.dungeon.start()
    }

    /// End cave of the dungeon.
    pub fn end(&self) -> Coordinate {
        self.dungeon.end()
    }

    /// Final edge list in wire form.
    pub fn edges(&self) -> Vec<String> {
        self.dungeon.wire_edges()
    }

    /// Current lifecycle stage of the player.
    pub fn player_slot(&self) -> &PlayerSlot {
        &self.player
    }

    /// Creates the player. Fails if a player already exists.
    pub fn create_player(&mut self) -> DelveResult<()> {
        match self.player {
            PlayerSlot::Uninitialized => {
                self.player = PlayerSlot::Created;
                Ok(())
            }
            _ => Err(DelveError::InvalidState(format!(
                "player already {}",
                self.player.stage()
            ))),
        }
    }

    /// Places the created player on the start cell.
    pub fn add_player_to_dungeon(&mut self) -> DelveResult<()> {
        match self.player {
            PlayerSlot::Created => {
                let player = self.dungeon.add_player();
                log::debug!("Player placed at {}", player.location());
                self.player = PlayerSlot::Placed(player);
                Ok(())
            }
            PlayerSlot::Uninitialized => Err(DelveError::InvalidState(
                "player has not been created".to_string(),
            )),
            PlayerSlot::Placed(_) => Err(DelveError::InvalidState(
                "player is already in the dungeon".to_string(),
            )),
        }
    }

    /// The placed player.
    pub fn player(&self) -> DelveResult<&Player> {
        match &self.player {
            PlayerSlot::Placed(player) => Ok(player),
            slot => Err(Self::not_placed(slot)),
        }
    }

    /// Splits the borrow so the dungeon can mutate the player it mediates.
    fn parts_mut(&mut self) -> DelveResult<(&mut Dungeon, &mut Player)> {
        match &mut self.player {
            PlayerSlot::Placed(player) => Ok((&mut self.dungeon, player)),
            slot => Err(Self::not_placed(slot)),
        }
    }

    fn not_placed(slot: &PlayerSlot) -> DelveError {
        DelveError::InvalidState(format!(
            "player is {}, not placed in the dungeon",
            slot.stage()
        ))
    }

    /// Current cell of the placed player.
    pub fn player_location(&self) -> DelveResult<Coordinate> {
        Ok(self.player()?.location())
    }

    /// Moves the placed player one step in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> DelveResult<MoveOutcome> {
        let (dungeon, player) = self.parts_mut()?;
        dungeon.move_player(player, direction)
    }

    /// Collects the treasure at the player's cell and returns it.
    pub fn pick_treasure(&mut self) -> DelveResult<TreasureHoard> {
        let (dungeon, player) = self.parts_mut()?;
        dungeon.pick_treasure(player)
    }

    /// Describes the cell the player stands on.
    pub fn player_location_description(&self) -> DelveResult<String> {
        self.dungeon.describe_location(self.player_location()?)
    }

    /// Describes the player's location and collected treasure.
    pub fn player_description(&self) -> DelveResult<String> {
        Ok(self.player()?.to_string())
    }

    /// Checks if the player stands on the end cave.
    pub fn has_reached_end(&self) -> DelveResult<bool> {
        Ok(self.player_location()? == self.dungeon.end())
    }

    /// Walks in random directions, picking up treasure after every move.
    ///
    /// Treasure on the start cell is collected first. The walk stops on the
    /// end cell or after `max_steps` attempted moves. Each step draws one
    /// direction from `rng`.
    pub fn wander(
        &mut self,
        rng: &mut dyn Randomizer,
        max_steps: usize,
    ) -> DelveResult<WalkReport> {
        let mut report = WalkReport::default();
        self.pick_treasure()?;

        while report.steps < max_steps && !self.has_reached_end()? {
            let direction = Direction::random(rng)?;
            report.steps += 1;
            match self.move_player(direction)? {
                MoveOutcome::Moved(_) => {
                    self.pick_treasure()?;
                }
                MoveOutcome::Blocked => report.blocked += 1,
            }
        }

        report.reached_end = self.has_reached_end()?;
        log::info!(
            "Walk finished after {} steps ({} blocked), reached end: {}",
            report.steps,
            report.blocked,
            report.reached_end
        );
        Ok(report)
    }
}
