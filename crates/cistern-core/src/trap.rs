//! The two-pointer trapping kernel.
//!
//! Water above column `i` is `min(max_left(i), max_right(i)) - h[i]` when
//! positive. The scan resolves one column per step from whichever end is
//! currently lower: that side is guaranteed a wall at least as tall on the
//! other side, so its own running maximum is the exact water line.

use crate::error::TrapError;

/// Compute the volume of rain trapped above `heights`.
///
/// Runs in O(n) time with O(1) extra space and never allocates. Every
/// column has unit width; the result is the sum over all columns of the
/// water standing above them.
///
/// Negative heights are accepted and treated arithmetically. Per-column
/// depths are exact for any spread that fits in `u64`; the running total
/// wraps on overflow rather than panicking.
///
/// ```
/// use cistern_core::rain_collected;
///
/// assert_eq!(rain_collected(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
/// assert_eq!(rain_collected(&[5, 0, 5]), 5);
/// assert_eq!(rain_collected(&[]), 0);
/// ```
pub fn rain_collected(heights: &[i64]) -> u64 {
    // `right` is computed from the length below; an empty terrain must
    // return before that subtraction.
    if heights.is_empty() {
        return 0;
    }

    let mut left = 0usize;
    let mut right = heights.len() - 1;
    let mut left_max = i64::MIN;
    let mut right_max = i64::MIN;
    let mut collected = 0u64;

    while left < right {
        let lh = heights[left];
        let rh = heights[right];
        if lh < rh {
            if lh > left_max {
                left_max = lh;
            } else {
                collected = collected.wrapping_add(depth(left_max, lh));
            }
            left += 1;
        } else {
            if rh > right_max {
                right_max = rh;
            } else {
                collected = collected.wrapping_add(depth(right_max, rh));
            }
            right -= 1;
        }
    }

    collected
}

/// Compute the trapped volume over the first `count` heights.
///
/// This is the entry for hosts that receive a buffer and a separate
/// count, e.g. when forwarding from a foreign caller into safe code.
/// `count` is checked against `heights.len()` before anything is read.
///
/// # Errors
///
/// [`TrapError::CountExceedsLength`] if `count > heights.len()`, and
/// [`TrapError::CountOverflow`] if `count` does not fit in `usize`.
///
/// ```
/// use cistern_core::{rain_collected_prefix, TrapError};
///
/// let terrain = [4, 2, 0, 3, 2, 5, 0, 9];
/// assert_eq!(rain_collected_prefix(&terrain, 6), Ok(9));
/// assert_eq!(
///     rain_collected_prefix(&terrain, 9),
///     Err(TrapError::CountExceedsLength { count: 9, len: 8 }),
/// );
/// ```
pub fn rain_collected_prefix(heights: &[i64], count: u64) -> Result<u64, TrapError> {
    let n = usize::try_from(count).map_err(|_| {
        tracing::debug!(count, "trap count does not fit usize");
        TrapError::CountOverflow { count }
    })?;
    let prefix = heights.get(..n).ok_or_else(|| {
        tracing::debug!(count, len = heights.len(), "trap count exceeds terrain length");
        TrapError::CountExceedsLength {
            count,
            len: heights.len(),
        }
    })?;
    Ok(rain_collected(prefix))
}

/// Water standing above a column of height `h` under a water line `wall`.
///
/// Callers guarantee `wall >= h`. The subtraction is done modulo 2^64 so
/// that spreads wider than `i64::MAX` still come out exact.
#[inline]
fn depth(wall: i64, h: i64) -> u64 {
    debug_assert!(wall >= h);
    wall.wrapping_sub(h) as u64
}
