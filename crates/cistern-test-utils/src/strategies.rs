//! Proptest generators for terrains.
//!
//! Heights stay within a few thousand so that totals never approach the
//! `u64` wrap and failures shrink to readable cases.

use proptest::collection::vec;
use proptest::prelude::*;

/// Longest terrain any strategy generates.
pub const MAX_COLUMNS: usize = 64;

/// Terrains with mixed-sign heights, including empty ones.
pub fn arb_terrain() -> impl Strategy<Value = Vec<i64>> {
    vec(-1_000i64..1_000, 0..MAX_COLUMNS)
}

/// Terrains with non-negative heights only.
pub fn arb_nonneg_terrain() -> impl Strategy<Value = Vec<i64>> {
    vec(0i64..1_000, 0..MAX_COLUMNS)
}

/// Terrains drawn from a handful of levels, which produces many ties and
/// flat plateaus.
pub fn arb_plateau_terrain() -> impl Strategy<Value = Vec<i64>> {
    vec(prop_oneof![Just(0i64), Just(3), Just(7)], 0..MAX_COLUMNS)
}
