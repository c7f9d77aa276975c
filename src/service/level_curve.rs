//! Level curve mapping cumulative XP to levels.
//!
//! Advancing from level `L` to `L + 1` costs `100 + 50L + 25L²` XP. XP is cumulative and
//! never reset on level-up: a member's level is the highest `L` whose cumulative threshold
//! `total_for_level(L)` is at or below their total.
//!
//! The cumulative threshold has the closed form
//! `100L + 25L(L - 1) + 25(L - 1)L(2L - 1) / 6`, so resolving a total is a cube-root estimate
//! followed by a couple of integer correction steps. There is no level cap; every `u64`
//! total resolves.

use crate::model::xp::LevelProgress;

/// XP cost of advancing from `level` to `level + 1`.
///
/// Saturates at `u64::MAX` for levels far beyond anything reachable with a `u64` total.
pub fn cost(level: u32) -> u64 {
    saturate(cost_wide(level as u128))
}

/// Cumulative XP needed to reach `level` from zero, i.e. the sum of `cost(0..level)`.
///
/// Saturates at `u64::MAX`.
pub fn total_for_level(level: u32) -> u64 {
    saturate(cumulative(level as u128))
}

/// Resolves a cumulative XP total into its level and the progress made within that level.
///
/// # Arguments
/// - `total_xp` - Cumulative XP ever earned
///
/// # Returns
/// - `LevelProgress` - Level reached, XP earned past its threshold, and the cost of the
///   next level. `into_level_xp < to_next` always holds.
pub fn resolve(total_xp: u64) -> LevelProgress {
    let target = total_xp as u128;

    // total_for_level(L) ~ (25/3)L³, so the cube root lands within a level of the answer
    let mut level = (3.0 * total_xp as f64 / 25.0).cbrt().floor() as u128;

    while level > 0 && cumulative(level) > target {
        level -= 1;
    }
    while cumulative(level + 1) <= target {
        level += 1;
    }

    LevelProgress {
        level: level as u32,
        into_level_xp: (target - cumulative(level)) as u64,
        to_next: saturate(cost_wide(level)),
    }
}

fn cost_wide(level: u128) -> u128 {
    100 + 50 * level + 25 * level * level
}

fn cumulative(level: u128) -> u128 {
    if level == 0 {
        return 0;
    }

    // (L - 1)L(2L - 1) is six times the sum of squares below L, so the division is exact
    100 * level + 25 * level * (level - 1) + 25 * (level - 1) * level * (2 * level - 1) / 6
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
