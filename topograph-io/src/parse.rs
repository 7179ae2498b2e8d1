//! Low-level parse errors for artifact decoding.
//!
//! Kept separate from `topograph_common::Error`: these carry the structural
//! detail (expected vs. actual magic, checksum mismatch) useful while
//! debugging a corrupt artifact, then get folded into the coarser
//! `topograph_common::Error::{IndexCorrupt, AdjacencyCorrupt}` at the crate
//! boundary that callers actually match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected magic number: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },

    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u16),

    #[error("checksum mismatch: computed {computed:#018x}, stored {stored:#018x}")]
    ChecksumMismatch { computed: u64, stored: u64 },

    #[error("truncated artifact: {0}")]
    Truncated(String),

    #[error("malformed offsets: {0}")]
    MalformedOffsets(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] bincode::Error),
}
