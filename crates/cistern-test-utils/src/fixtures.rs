//! Hand-checked terrains.
//!
//! [`CANONICAL`] are the contract scenarios every entry point must agree
//! on. [`SUPPLEMENTARY`] adds plateaus, ramps, and negative heights.

/// A terrain with its known trapped volume.
#[derive(Clone, Copy, Debug)]
pub struct Case {
    pub name: &'static str,
    pub heights: &'static [i64],
    pub expected: u64,
}

pub const CANONICAL: &[Case] = &[
    Case {
        name: "classic_twelve",
        heights: &[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1],
        expected: 6,
    },
    Case {
        name: "deep_left_basin",
        heights: &[4, 2, 0, 3, 2, 5],
        expected: 9,
    },
    Case {
        name: "empty",
        heights: &[],
        expected: 0,
    },
    Case {
        name: "single_column",
        heights: &[5],
        expected: 0,
    },
    Case {
        name: "flat",
        heights: &[3, 3, 3, 3],
        expected: 0,
    },
    Case {
        name: "single_pit",
        heights: &[5, 0, 5],
        expected: 5,
    },
];

pub const SUPPLEMENTARY: &[Case] = &[
    Case {
        name: "zeros",
        heights: &[0, 0, 0, 0, 0],
        expected: 0,
    },
    Case {
        name: "ascending",
        heights: &[1, 2, 3, 4, 5],
        expected: 0,
    },
    Case {
        name: "descending",
        heights: &[5, 4, 3, 2, 1],
        expected: 0,
    },
    Case {
        name: "peak",
        heights: &[1, 2, 3, 2, 1],
        expected: 0,
    },
    Case {
        name: "shoulder",
        heights: &[1, 2, 3, 2, 4, 1],
        expected: 1,
    },
    Case {
        name: "staircase",
        heights: &[1, 4, 2, 5, 3, 6, 4, 7],
        expected: 6,
    },
    Case {
        name: "tiny_pit",
        heights: &[2, 1, 2],
        expected: 1,
    },
    Case {
        name: "plateau",
        heights: &[5, 4, 2, 6, 6, 6, 4, 5],
        expected: 5,
    },
    Case {
        name: "classic_with_negative",
        heights: &[0, 1, -1, 2, 1, 0, 1, 3, 2, 1, 2, 1],
        expected: 7,
    },
    Case {
        name: "mixed_sign",
        heights: &[0, -6, 0, -2, 8, -9, 0, 8, 9, -5],
        expected: 33,
    },
];

/// Every fixture, canonical first.
pub fn all_cases() -> impl Iterator<Item = &'static Case> {
    CANONICAL.iter().chain(SUPPLEMENTARY)
}
