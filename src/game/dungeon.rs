//! # Dungeon
//!
//! The frozen dungeon graph produced by generation, and the movement and
//! pickup rules a placed [`Player`] follows inside it.

use crate::{
    Adjacency, Cave, CellKind, Coordinate, DelveError, DelveResult, Direction, DungeonConfig,
    DungeonGenerator, Edge, Generator, GridShape, Player, Randomizer, TreasureHoard,
};
use serde::{Deserialize, Serialize};

/// Result of a movement attempt.
///
/// Walking into a closed door is not an error; it is reported as
/// [`MoveOutcome::Blocked`] and leaves the player untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The player now stands on this cell
    Moved(Coordinate),
    /// The door in the requested direction is closed
    Blocked,
}

impl MoveOutcome {
    /// Whether the move was refused by a closed door.
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved(location) => write!(f, "Moved to {}", location),
            MoveOutcome::Blocked => f.write_str("Blocked: there is no door that way"),
        }
    }
}

/// A fully generated dungeon.
///
/// Doors never change after construction. The only mutable state is the
/// treasure held by each cave, which is zeroed by [`Dungeon::pick_treasure`].
#[derive(Debug, Clone)]
pub struct Dungeon {
    shape: GridShape,
    /// One cell per coordinate, row-major
    caves: Vec<Cave>,
    edges: Vec<Edge>,
    start: Coordinate,
    end: Coordinate,
    adjacency: Adjacency,
}

/// Serializable snapshot of a dungeon, for reports and `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonSummary {
    pub rows: usize,
    pub cols: usize,
    pub wrapping: bool,
    pub start: Coordinate,
    pub end: Coordinate,
    pub terminal_distance: Option<usize>,
    pub cave_count: usize,
    pub tunnel_count: usize,
    pub edges: Vec<String>,
    pub caves: Vec<Cave>,
}

impl Dungeon {
    /// Generates a dungeon with the default [`DungeonGenerator`].
    ///
    /// Layout decisions are drawn from `rng` and treasure quantities from
    /// `treasure_rng`.
    pub fn generate(
        config: &DungeonConfig,
        rng: &mut dyn Randomizer,
        treasure_rng: &mut dyn Randomizer,
    ) -> DelveResult<Self> {
        DungeonGenerator::new().generate(config, rng, treasure_rng)
    }

    pub(crate) fn from_parts(
        shape: GridShape,
        caves: Vec<Cave>,
        edges: Vec<Edge>,
        start: Coordinate,
        end: Coordinate,
    ) -> Self {
        let adjacency = Adjacency::from_edges(&shape, &edges);
        Self {
            shape,
            caves,
            edges,
            start,
            end,
            adjacency,
        }
    }

    /// Grid dimensions and wrap flag.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Whether the borders wrap around.
    pub fn is_wrapping(&self) -> bool {
        self.shape.wrapping
    }

    /// Cave where players are placed.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Cave the player is trying to reach.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Final edge set, spanning tree edges first then interconnections.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All cells in row-major order.
    pub fn caves(&self) -> &[Cave] {
        &self.caves
    }

    /// Edges in the `"<row><col>-<row><col>"` wire form.
    pub fn wire_edges(&self) -> Vec<String> {
        self.edges.iter().map(|edge| edge.to_string()).collect()
    }

    /// Looks up the cell at `coord`.
    pub fn cave(&self, coord: Coordinate) -> DelveResult<&Cave> {
        if !self.shape.contains(coord) {
            return Err(DelveError::InvalidLocation(coord));
        }
        Ok(&self.caves[self.shape.index_of(coord)])
    }

    fn cave_mut(&mut self, coord: Coordinate) -> DelveResult<&mut Cave> {
        if !self.shape.contains(coord) {
            return Err(DelveError::InvalidLocation(coord));
        }
        let index = self.shape.index_of(coord);
        Ok(&mut self.caves[index])
    }

    /// Cave or Tunnel at `coord`.
    pub fn cell_kind(&self, coord: Coordinate) -> DelveResult<CellKind> {
        Ok(self.cave(coord)?.kind())
    }

    /// Treasure currently held at `coord`.
    pub fn treasure_at(&self, coord: Coordinate) -> DelveResult<TreasureHoard> {
        Ok(self.cave(coord)?.treasure())
    }

    /// Open directions at `coord` in North, East, South, West order.
    pub fn possible_moves(&self, coord: Coordinate) -> DelveResult<Vec<Direction>> {
        Ok(self.cave(coord)?.doors().open_directions())
    }

    /// Number of cells that are not tunnels.
    pub fn cave_count(&self) -> usize {
        self.caves.iter().filter(|cave| !cave.is_tunnel()).count()
    }

    /// Number of tunnels.
    pub fn tunnel_count(&self) -> usize {
        self.caves.iter().filter(|cave| cave.is_tunnel()).count()
    }

    /// Shortest path length in moves, or `None` when unreachable.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> Option<usize> {
        self.adjacency.distance(from, to)
    }

    /// Checks if every cell reaches every other cell.
    pub fn is_connected(&self) -> bool {
        self.adjacency.is_connected()
    }

    /// Places a new player on the start cell.
    pub fn add_player(&self) -> Player {
        Player::new(self.start)
    }

    /// Moves `player` one step in `direction` if the door is open.
    ///
    /// With wrapping enabled, stepping off a border lands on the opposite
    /// border of the same axis.
    pub fn move_player(
        &self,
        player: &mut Player,
        direction: Direction,
    ) -> DelveResult<MoveOutcome> {
        let here = player.location();
        if !self.cave(here)?.can_move(direction) {
            log::trace!("Move {} from {} blocked", direction, here);
            return Ok(MoveOutcome::Blocked);
        }

        let next = self.shape.neighbor(here, direction).ok_or_else(|| {
            DelveError::InvalidState(format!("door {} at {} leads off the grid", direction, here))
        })?;
        player.set_location(next);
        log::trace!("Moved {} from {} to {}", direction, here, next);
        Ok(MoveOutcome::Moved(next))
    }

    /// Moves all treasure at the player's cell into the player's hoard.
    ///
    /// Returns what was collected; a second pickup at the same cell collects
    /// nothing.
    pub fn pick_treasure(&mut self, player: &mut Player) -> DelveResult<TreasureHoard> {
        let collected = self.cave_mut(player.location())?.take_treasure();
        player.collect(collected);
        if !collected.is_empty() {
            log::debug!("Picked up {} at {}", collected, player.location());
        }
        Ok(collected)
    }

    /// Describes a cell: its type, its treasure when it is a cave, and the
    /// available moves unless it is the end.
    pub fn describe_location(&self, coord: Coordinate) -> DelveResult<String> {
        let cave = self.cave(coord)?;
        let mut lines = vec![format!("Location {}: {}", coord, cave.kind())];

        if !cave.is_tunnel() {
            lines.push(format!("Treasure: {}", cave.treasure()));
        }

        if coord == self.end {
            lines.push("You have reached the end of the dungeon".to_string());
        } else {
            let moves: Vec<&str> = cave
                .doors()
                .open_directions()
                .into_iter()
                .map(Direction::name)
                .collect();
            lines.push(format!("Possible moves: {}", moves.join(", ")));
        }

        Ok(lines.join("\n"))
    }

    /// Serializable snapshot of the layout and current treasure.
    pub fn summary(&self) -> DungeonSummary {
        DungeonSummary {
            rows: self.rows(),
            cols: self.cols(),
            wrapping: self.is_wrapping(),
            start: self.start,
            end: self.end,
            terminal_distance: self.distance(self.start, self.end),
            cave_count: self.cave_count(),
            tunnel_count: self.tunnel_count(),
            edges: self.wire_edges(),
            caves: self.caves.clone(),
        }
    }
}
