//! Error types for the topograph toolkit
//!
//! "No path within the cutoff" is *not* represented here — the engine
//! treats that as an expected, non-fatal outcome and returns it as an
//! ordinary value (see `topograph_graph::PathsInfo`). An unknown topic is
//! split two ways per `spec.md`: `shortest_paths` treats it as a value too
//! (`ShortestPaths::UnknownSource`/`UnknownTarget`), but `children`/
//! `ancestors` treat it as the error spec.md §6 calls it ("unknown topic is
//! an error") — hence `Error::UnknownTopic` exists here for those two
//! call sites specifically. Everything else in this enum is a
//! configuration or I/O failure: an artifact that could not be read, or one
//! that was read but fails its integrity check.

use std::fmt;

/// Main error type for topograph operations.
#[derive(Debug)]
pub enum Error {
    /// The topic index artifact is missing or could not be opened.
    IndexLoadError(String),

    /// The topic index artifact was read but failed its integrity check.
    IndexCorrupt(String),

    /// The adjacency artifact is missing or could not be opened.
    AdjacencyLoadError(String),

    /// The adjacency artifact was read but failed its integrity check.
    AdjacencyCorrupt(String),

    /// A node or edge index fell outside `[0, n)` while building a store.
    OutOfBounds(String),

    /// `children`/`ancestors` were asked about a topic not present in the
    /// index. Unlike `shortest_paths`, which treats an unknown endpoint as
    /// a plain value, spec.md §6 names this case an error for these two
    /// single-topic lookups.
    UnknownTopic(String),

    /// Underlying file I/O error.
    Io(std::io::Error),

    /// A remote artifact could not be fetched (network failure, bad status,
    /// exhausted retries).
    Fetch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexLoadError(msg) => write!(f, "failed to load topic index: {msg}"),
            Error::IndexCorrupt(msg) => write!(f, "topic index artifact is corrupt: {msg}"),
            Error::AdjacencyLoadError(msg) => write!(f, "failed to load adjacency store: {msg}"),
            Error::AdjacencyCorrupt(msg) => {
                write!(f, "adjacency store artifact is corrupt: {msg}")
            }
            Error::OutOfBounds(msg) => write!(f, "index out of bounds: {msg}"),
            Error::UnknownTopic(topic) => write!(f, "unknown topic: {topic:?}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Fetch(msg) => write!(f, "failed to fetch remote artifact: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convenience result type for topograph operations.
pub type Result<T> = std::result::Result<T, Error>;
