//! Error types for the checked entry points.
//!
//! The kernel itself cannot fail. The only condition a safe host can
//! detect is a caller-supplied count that does not describe the buffer
//! it came with.

/// Rejected arguments to [`rain_collected_prefix`](crate::rain_collected_prefix).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrapError {
    /// The requested column count is larger than the terrain slice.
    #[error("count {count} exceeds terrain length {len}")]
    CountExceedsLength {
        /// The count the caller asked for.
        count: u64,
        /// The actual number of heights available.
        len: usize,
    },
    /// The requested column count does not fit in this platform's `usize`,
    /// so no in-memory buffer can hold that many heights.
    #[error("count {count} does not fit in the platform address width")]
    CountOverflow {
        /// The count the caller asked for.
        count: u64,
    },
}
