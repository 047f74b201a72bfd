//! Benchmark profiles for the Cistern kernel.
//!
//! - [`reference_terrain`]: 100K columns, heights in `0..100K`.
//! - [`stress_terrain`]: 10M columns, heights in `0..10M`.
//!
//! Both are deterministic for a given seed so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cistern_test_utils::terrain_gen::hashed_terrain;

/// Columns in the reference profile.
pub const REFERENCE_COLUMNS: usize = 100_000;

/// Columns in the stress profile.
pub const STRESS_COLUMNS: usize = 10_000_000;

/// Build the reference benchmark terrain.
pub fn reference_terrain(seed: u64) -> Vec<i64> {
    hashed_terrain(REFERENCE_COLUMNS, seed)
}

/// Build the stress benchmark terrain (~80 MB).
pub fn stress_terrain(seed: u64) -> Vec<i64> {
    hashed_terrain(STRESS_COLUMNS, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_terrain_has_expected_width() {
        let t = reference_terrain(1);
        assert_eq!(t.len(), REFERENCE_COLUMNS);
        assert!(t.iter().all(|h| (0..REFERENCE_COLUMNS as i64).contains(h)));
    }

    #[test]
    fn reference_terrain_traps_water() {
        assert!(cistern_core::rain_collected(&reference_terrain(1)) > 0);
    }
}
