//! Test utilities for Cistern development.
//!
//! Deliberately independent of `cistern-core` so that core's own unit
//! tests can use it without a dev-dependency cycle. Everything here speaks
//! plain `&[i64]` and `u64`.
//!
//! - [`fixtures`]: hand-checked terrains with their expected volumes.
//! - [`oracle`]: the brute-force per-column definition of trapped volume.
//! - [`strategies`]: proptest generators for terrains.
//! - [`terrain_gen`]: deterministic large terrains for benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;
pub mod strategies;
pub mod terrain_gen;
