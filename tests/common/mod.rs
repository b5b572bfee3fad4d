//! Recorded random sequences and the dungeons they rebuild.

#![allow(dead_code)]

use delve::{Coordinate, Direction, Dungeon, DungeonConfig, DungeonGame, ReplayRandomizer};

/// Draws for the 40 candidate edges of a flat 5x5 grid.
pub const FLAT_TREE: [usize; 40] = [
    20, 6, 7, 11, 17, 15, 29, 27, 5, 3, 6, 5, 7, 24, 6, 11, 17, 13, 9, 0, 18, 5, 1, 16, 5, 8, 6,
    3, 6, 5, 0, 1, 1, 3, 4, 2, 2, 0, 0, 0,
];
pub const FLAT_INTERCONNECT: [usize; 6] = [8, 9, 6, 10, 0, 5];
pub const FLAT_TERMINALS: [usize; 2] = [19, 1];
pub const FLAT_TREASURE: [usize; 5] = [14, 8, 22, 3, 6];
pub const FLAT_MOVES: [usize; 33] = [
    4, 2, 2, 2, 2, 3, 4, 4, 4, 4, 2, 3, 2, 2, 2, 3, 4, 1, 4, 4, 4, 3, 2, 4, 3, 2, 2, 2, 2, 4, 4,
    3, 1,
];

/// Draws for the 50 candidate edges of a wrapped 5x5 grid.
pub const WRAPPED_TREE: [usize; 50] = [
    17, 34, 2, 3, 0, 14, 40, 42, 17, 24, 36, 14, 12, 24, 27, 24, 10, 20, 6, 1, 23, 19, 5, 4, 21,
    22, 9, 22, 18, 10, 18, 7, 9, 8, 7, 7, 6, 10, 8, 4, 9, 0, 6, 2, 4, 4, 0, 0, 0, 0,
];
pub const WRAPPED_INTERCONNECT: [usize; 8] = [5, 13, 4, 17, 0, 12, 12, 15];
pub const WRAPPED_TERMINALS: [usize; 2] = [24, 6];
pub const WRAPPED_TREASURE: [usize; 21] = [
    21, 21, 9, 13, 22, 13, 4, 15, 12, 5, 13, 1, 20, 22, 13, 14, 20, 23, 20, 21, 17,
];
pub const WRAPPED_MOVES: [usize; 34] = [
    4, 3, 2, 4, 3, 2, 4, 3, 1, 4, 3, 1, 4, 4, 3, 2, 4, 4, 3, 4, 2, 2, 2, 2, 3, 3, 4, 1, 3, 3, 3,
    4, 1, 1,
];

pub fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Treasure quantities for up to eight caves, none of them zero.
pub fn treasure_source() -> ReplayRandomizer {
    ReplayRandomizer::new(std::iter::repeat([4, 7, 2]).take(8).flatten())
}

pub fn layout_source(parts: &[&[usize]]) -> ReplayRandomizer {
    ReplayRandomizer::new(parts.iter().flat_map(|part| part.iter().copied()))
}

pub fn flat_dungeon() -> (Dungeon, ReplayRandomizer) {
    let config = DungeonConfig::new(5, 5)
        .with_interconnectivity(6)
        .with_treasure_percent(40);
    let mut rng = layout_source(&[
        &FLAT_TREE,
        &FLAT_INTERCONNECT,
        &FLAT_TERMINALS,
        &FLAT_TREASURE,
    ]);
    let dungeon = Dungeon::generate(&config, &mut rng, &mut treasure_source())
        .expect("recorded flat dungeon should generate");
    (dungeon, rng)
}

pub fn wrapped_dungeon() -> (Dungeon, ReplayRandomizer) {
    let config = DungeonConfig::new(5, 5)
        .with_interconnectivity(8)
        .with_wrapping(true)
        .with_treasure_percent(40);
    let mut rng = layout_source(&[
        &WRAPPED_TREE,
        &WRAPPED_INTERCONNECT,
        &WRAPPED_TERMINALS,
        &WRAPPED_TREASURE,
    ]);
    let dungeon = Dungeon::generate(&config, &mut rng, &mut treasure_source())
        .expect("recorded wrapped dungeon should generate");
    (dungeon, rng)
}

pub fn directions(moves: &[usize]) -> Vec<Direction> {
    moves
        .iter()
        .map(|&m| Direction::from_ordinal(m).expect("recorded move in 1..=4"))
        .collect()
}

/// Wraps a dungeon in a game with the player already placed at the start.
pub fn placed(dungeon: Dungeon) -> DungeonGame {
    let mut game = DungeonGame::from_dungeon(dungeon);
    game.create_player().unwrap();
    game.add_player_to_dungeon().unwrap();
    game
}
