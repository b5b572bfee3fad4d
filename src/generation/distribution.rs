//! # Treasure Distribution
//!
//! Stocks a percentage of the caves with randomly sized hoards.

use crate::{config, Cave, DelveError, DelveResult, Randomizer, TreasureHoard};
use log::{debug, trace};

/// Number of caves that receive treasure: `percent` of `cave_count`,
/// rounded half up.
///
/// # Examples
///
/// ```
/// use delve::treasure_target;
///
/// assert_eq!(treasure_target(40, 11), 4);
/// assert_eq!(treasure_target(50, 5), 3);
/// assert_eq!(treasure_target(4, 12), 0);
/// ```
pub fn treasure_target(percent: u32, cave_count: usize) -> usize {
    (percent as usize * cave_count + 50) / 100
}

/// Stocks `treasure_target(percent, caves)` distinct caves with treasure.
///
/// Cells are drawn uniformly from `rng`; tunnels and caves already stocked
/// are skipped and drawn again. Each stocked cave rolls its hoard from
/// `treasure_rng`. Returns the number of caves stocked.
pub fn assign_treasure(
    caves: &mut [Cave],
    percent: u32,
    rng: &mut dyn Randomizer,
    treasure_rng: &mut dyn Randomizer,
) -> DelveResult<usize> {
    if percent > config::MAX_TREASURE_PERCENT {
        return Err(DelveError::InvalidConfig(format!(
            "treasure percentage {} is outside 0..={}",
            percent,
            config::MAX_TREASURE_PERCENT
        )));
    }

    let cave_count = caves.iter().filter(|cave| !cave.is_tunnel()).count();
    let target = treasure_target(percent, cave_count);
    if target == 0 {
        return Err(DelveError::InvalidConfig(format!(
            "treasure percentage {} is too low for {} caves",
            percent, cave_count
        )));
    }
    debug!("Placing treasure in {} of {} caves", target, cave_count);

    let mut stocked = vec![false; caves.len()];
    let mut assigned = 0;
    while assigned < target {
        let index = rng.next_index(caves.len())?;
        if stocked[index] || caves[index].is_tunnel() {
            continue;
        }

        let hoard = TreasureHoard::roll(treasure_rng)?;
        if caves[index].stock(hoard) {
            trace!("Stocked {} with {}", caves[index].location(), hoard);
            stocked[index] = true;
            assigned += 1;
        }
    }

    Ok(assigned)
}
