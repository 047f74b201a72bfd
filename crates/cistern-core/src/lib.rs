//! Trapped rain water over a one-dimensional terrain.
//!
//! This is the leaf crate with zero internal dependencies. It holds the
//! two-pointer kernel ([`rain_collected`]), the count-validating entry
//! used by safe hosts ([`rain_collected_prefix`]), the borrowed
//! [`Terrain`] view, and the [`TrapError`] type. The C boundary lives in
//! `cistern-ffi`.
//!
//! ```
//! use cistern_core::rain_collected;
//!
//! assert_eq!(rain_collected(&[4, 2, 0, 3, 2, 5]), 9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod terrain;
pub mod trap;

pub use error::TrapError;
pub use terrain::Terrain;
pub use trap::{rain_collected, rain_collected_prefix};
