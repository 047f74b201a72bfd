//! Borrowed view over an elevation profile.

use std::fmt;

use crate::trap::rain_collected;

/// A read-only elevation profile: one `i64` height per unit-width column.
///
/// `Terrain` only borrows its heights, so it is `Copy`, free to build, and
/// can be shared across threads. It never mutates or reorders the columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Terrain<'a> {
    heights: &'a [i64],
}

impl<'a> Terrain<'a> {
    /// Wrap a slice of heights.
    pub const fn new(heights: &'a [i64]) -> Self {
        Self { heights }
    }

    /// The underlying heights.
    pub const fn heights(&self) -> &'a [i64] {
        self.heights
    }

    /// Number of columns.
    pub const fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether the terrain has no columns.
    pub const fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Volume of rain trapped above this terrain.
    pub fn rain_collected(&self) -> u64 {
        rain_collected(self.heights)
    }
}

impl<'a> From<&'a [i64]> for Terrain<'a> {
    fn from(heights: &'a [i64]) -> Self {
        Self::new(heights)
    }
}

impl<'a, const N: usize> From<&'a [i64; N]> for Terrain<'a> {
    fn from(heights: &'a [i64; N]) -> Self {
        Self::new(heights)
    }
}

impl fmt::Display for Terrain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "terrain of {} columns", self.heights.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_without_copying() {
        let heights = [4, 2, 0, 3, 2, 5];
        let t = Terrain::new(&heights);
        assert_eq!(t.len(), 6);
        assert!(!t.is_empty());
        assert!(std::ptr::eq(t.heights(), &heights[..]));
    }

    #[test]
    fn delegates_to_kernel() {
        let t = Terrain::from(&[4, 2, 0, 3, 2, 5]);
        assert_eq!(t.rain_collected(), 9);
    }

    #[test]
    fn empty_terrain() {
        let t = Terrain::new(&[]);
        assert!(t.is_empty());
        assert_eq!(t.rain_collected(), 0);
    }

    #[test]
    fn display_reports_width() {
        let t = Terrain::from(&[1, 2, 3]);
        assert_eq!(t.to_string(), "terrain of 3 columns");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Terrain<'static>>();
    }
}
