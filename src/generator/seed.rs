//! Seed handling for reproducible trials
//!
//! Each trial gets its own RNG stream derived from the run seed and the
//! trial index, so results do not depend on which thread runs which trial.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{SystemTime, UNIX_EPOCH};

#[inline]
#[must_use]
pub const fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed of the RNG stream for trial `index`
#[inline]
#[must_use]
pub const fn trial_seed(seed: u64, index: usize) -> u64 {
    splitmix64(seed ^ splitmix64(index as u64))
}

/// Fresh RNG for trial `index`
#[must_use]
pub fn trial_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(trial_seed(seed, index))
}

/// Seed derived from the wall clock (seconds since the Unix epoch)
#[must_use]
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
