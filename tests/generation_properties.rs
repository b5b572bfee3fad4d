//! Property tests for generated dungeons over random sizes, degrees, wrap
//! flags and seeds.

use delve::{
    Coordinate, DelveError, Direction, Dungeon, DungeonConfig, DungeonGame, DungeonGenerator,
    Edge, Generator, GridShape, MoveOutcome, UniformRandomizer,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Builds a config from a degree expressed as a share of the maximum.
fn config(
    rows: usize,
    cols: usize,
    wrapping: bool,
    degree_share: usize,
    percent: u32,
) -> DungeonConfig {
    let base = DungeonConfig::new(rows, cols)
        .with_wrapping(wrapping)
        .with_treasure_percent(percent);
    let degree = base.max_interconnectivity() * degree_share / 100;
    base.with_interconnectivity(degree)
}

/// Generates a dungeon, or `None` when the parameters legitimately cannot
/// produce one (no distant terminal pair, or a zero treasure target).
fn generate(config: &DungeonConfig, seed: u64) -> Option<Dungeon> {
    let mut rng = UniformRandomizer::seeded(seed);
    let mut treasure_rng = UniformRandomizer::seeded(seed.wrapping_mul(31).wrapping_add(7));
    match Dungeon::generate(config, &mut rng, &mut treasure_rng) {
        Ok(dungeon) => Some(dungeon),
        Err(DelveError::GenerationFailed(_)) | Err(DelveError::InvalidConfig(_)) => None,
        Err(other) => panic!("unexpected error for {:?}: {}", config, other),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn generated_dungeons_hold_their_invariants(
        rows in 3_usize..=8,
        cols in 3_usize..=8,
        wrapping in any::<bool>(),
        degree_share in 0_usize..=100,
        percent in 0_u32..=100,
        seed in any::<u64>(),
    ) {
        let config = config(rows, cols, wrapping, degree_share, percent);
        let Some(dungeon) = generate(&config, seed) else {
            return Ok(());
        };

        prop_assert!(DungeonGenerator::new().validate(&dungeon, &config).is_ok());
        prop_assert_eq!(dungeon.caves().len(), rows * cols);
        prop_assert_eq!(dungeon.edges().len(), rows * cols - 1 + config.interconnectivity);

        let unique: HashSet<Edge> = dungeon.edges().iter().copied().collect();
        prop_assert_eq!(unique.len(), dungeon.edges().len());

        let origin = Coordinate::origin();
        for cell in dungeon.shape().coordinates() {
            prop_assert!(dungeon.distance(origin, cell).is_some(), "{} unreachable", cell);
        }

        let mut open_doors = 0;
        for cave in dungeon.caves() {
            let open = cave.doors().open_directions();
            open_doors += open.len();
            prop_assert_eq!(cave.is_tunnel(), open.len() == 2);
            if cave.is_tunnel() {
                prop_assert!(cave.treasure().is_empty());
            }

            for direction in open {
                let neighbour = dungeon.shape().neighbor(cave.location(), direction);
                prop_assert!(neighbour.is_some());
                let other = dungeon.cave(neighbour.unwrap()).unwrap();
                prop_assert!(other.can_move(direction.opposite()));
            }
        }
        prop_assert_eq!(open_doors, 2 * dungeon.edges().len());

        let (start, end) = (dungeon.start(), dungeon.end());
        prop_assert_ne!(start, end);
        prop_assert!(!dungeon.cave(start).unwrap().is_tunnel());
        prop_assert!(!dungeon.cave(end).unwrap().is_tunnel());
        prop_assert!(dungeon.distance(start, end).unwrap() >= 5);
    }

    #[test]
    fn moves_are_blocked_or_follow_an_open_door(
        wrapping in any::<bool>(),
        seed in any::<u64>(),
        moves in prop::collection::vec(1_usize..=4, 1..60),
    ) {
        let config = config(6, 6, wrapping, 30, 60);
        let Some(dungeon) = generate(&config, seed) else {
            return Ok(());
        };
        let mut game = DungeonGame::from_dungeon(dungeon);
        game.create_player().unwrap();
        game.add_player_to_dungeon().unwrap();

        for ordinal in moves {
            let direction = Direction::from_ordinal(ordinal).unwrap();
            let before = game.player().unwrap().clone();
            let door_open = game.dungeon().cave(before.location()).unwrap().can_move(direction);

            match game.move_player(direction).unwrap() {
                MoveOutcome::Blocked => {
                    prop_assert!(!door_open);
                    prop_assert_eq!(game.player().unwrap(), &before);
                }
                MoveOutcome::Moved(next) => {
                    prop_assert!(door_open);
                    prop_assert_eq!(
                        Some(next),
                        game.dungeon().shape().neighbor(before.location(), direction)
                    );
                    prop_assert_eq!(game.player().unwrap().treasure(), before.treasure());
                }
            }

            let collected = game.pick_treasure().unwrap();
            let again = game.pick_treasure().unwrap();
            prop_assert!(again.is_empty());
            let here = game.player_location().unwrap();
            prop_assert!(game.dungeon().treasure_at(here).unwrap().is_empty());
            prop_assert!(game.player().unwrap().treasure().total() >= collected.total());
        }
    }

    #[test]
    fn wrapping_moves_cross_to_the_opposite_border(
        rows in 3_usize..=12,
        cols in 3_usize..=12,
        index in any::<prop::sample::Index>(),
    ) {
        let shape = GridShape::new(rows, cols, true);
        let row = index.index(rows);
        let col = index.index(cols);

        prop_assert_eq!(
            shape.neighbor(Coordinate::new(0, col), Direction::North),
            Some(Coordinate::new(rows - 1, col))
        );
        prop_assert_eq!(
            shape.neighbor(Coordinate::new(rows - 1, col), Direction::South),
            Some(Coordinate::new(0, col))
        );
        prop_assert_eq!(
            shape.neighbor(Coordinate::new(row, 0), Direction::West),
            Some(Coordinate::new(row, cols - 1))
        );
        prop_assert_eq!(
            shape.neighbor(Coordinate::new(row, cols - 1), Direction::East),
            Some(Coordinate::new(row, 0))
        );

        let flat = GridShape::new(rows, cols, false);
        prop_assert_eq!(flat.neighbor(Coordinate::new(0, col), Direction::North), None);
        prop_assert_eq!(flat.neighbor(Coordinate::new(row, cols - 1), Direction::East), None);
    }
}
