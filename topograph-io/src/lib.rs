//! Binary artifact formats for the topograph graph engine.
//!
//! Two persisted formats, both magic/version/CRC-64-framed the way the
//! teacher's `nbg.csr` format is: the CSR adjacency artifact ([`csr`]) and
//! the topic index artifact ([`index`]).

pub mod crc;
pub mod csr;
pub mod index;
mod parse;

pub use crc::Digest;
pub use csr::CsrAdjacency;
pub use index::TopicIndex;
pub use parse::ParseError;

use topograph_common::Error;

/// Converts a low-level adjacency parse failure into the crate-crossing error type.
pub fn adjacency_error(err: ParseError) -> Error {
    match err {
        ParseError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            Error::AdjacencyLoadError(io_err.to_string())
        }
        ParseError::Io(io_err) => Error::Io(io_err),
        other => Error::AdjacencyCorrupt(other.to_string()),
    }
}

/// Converts a low-level index parse failure into the crate-crossing error type.
pub fn index_error(err: ParseError) -> Error {
    match err {
        ParseError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            Error::IndexLoadError(io_err.to_string())
        }
        ParseError::Io(io_err) => Error::Io(io_err),
        other => Error::IndexCorrupt(other.to_string()),
    }
}
