//! Shared normalization, constants, and error types for the topograph toolkit

pub mod error;
pub mod normalize;

pub use error::{Error, Result};
pub use normalize::canonicalize;

/// Maximum degrees of separation the search engine will explore.
///
/// Fixed per the engine's contract: paths longer than this are never
/// reported, regardless of whether a longer connection exists.
pub const MAX_DEPTH: u8 = 6;
