//! Engine construction knobs.
//!
//! Mirrors the teacher's `SourceConfig` — a plain `Default`-able struct
//! passed to the constructor rather than threaded through every call.

use topograph_common::MAX_DEPTH;

/// Tunables for an [`crate::Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// When `true`, the undirected neighbor view is recomputed on every call
    /// instead of being materialized and cached. Trades CPU for the memory
    /// that materialized view would otherwise hold (`spec.md` §4.4).
    pub optimize_memory: bool,

    /// Hard cap on the combined forward+backward depth a search will
    /// explore (`spec.md` §4.5's `MAX_DEPTH`). Configurable so tests can
    /// exercise cutoff behavior on small fixtures without six full BFS
    /// layers; production callers leave this at the default.
    pub max_depth: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            optimize_memory: true,
            max_depth: MAX_DEPTH,
        }
    }
}
