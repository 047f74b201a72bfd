//! Brute-force reference for trapped volume.
//!
//! Builds the prefix and suffix maxima explicitly and sums
//! `min(max_left, max_right) - h` per column. O(n) time, O(n) space; only
//! meant to check the constant-space kernel against.

/// Trapped volume by the per-column definition.
///
/// Depths are computed in `i128` so extreme `i64` spreads are exact; the
/// total wraps at `u64` like the kernel's accumulator.
pub fn brute_force_volume(heights: &[i64]) -> u64 {
    let n = heights.len();
    if n < 3 {
        return 0;
    }

    let mut max_left = Vec::with_capacity(n);
    let mut running = i64::MIN;
    for &h in heights {
        running = running.max(h);
        max_left.push(running);
    }

    let mut max_right = vec![i64::MIN; n];
    running = i64::MIN;
    for (i, &h) in heights.iter().enumerate().rev() {
        running = running.max(h);
        max_right[i] = running;
    }

    heights
        .iter()
        .zip(max_left.iter().zip(&max_right))
        .fold(0u64, |acc, (&h, (&l, &r))| {
            let wall = l.min(r) as i128;
            let depth = (wall - h as i128) as u64;
            acc.wrapping_add(depth)
        })
}
