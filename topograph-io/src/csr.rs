//! `.tgcsr` format — compact CSR adjacency artifact.
//!
//! Mirrors the scipy CSR triple `spec.md` §6 describes (`indptr`, `indices`,
//! and an unused `data` array of ones we deliberately do not persist) in a
//! magic/version/CRC-64-framed binary layout, the same shape as the
//! teacher's `nbg.csr` format.
//!
//! Layout:
//! ```text
//! magic:        u32  ("TGCS")
//! version:      u16
//! reserved:     u16
//! n_nodes:      u32
//! n_edges:      u64
//! created_unix: u64
//! indptr:       [u64; n_nodes + 1]
//! indices:      [u32; n_edges]
//! crc64:        u64   (over everything above)
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::crc;
use crate::parse::ParseError;

const MAGIC: u32 = u32::from_le_bytes(*b"TGCS");
const VERSION: u16 = 1;

/// The forward (CSR) half of an adjacency store, as read from or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrAdjacency {
    pub n_nodes: u32,
    pub created_unix: u64,
    pub indptr: Vec<u64>,
    pub indices: Vec<u32>,
}

impl CsrAdjacency {
    pub fn n_edges(&self) -> u64 {
        self.indices.len() as u64
    }

    /// Builds a CSR adjacency from a per-node list of successor ids, as
    /// produced by `topograph-graph`'s in-memory graph builder.
    pub fn from_adjacency_lists(adjacency: &[Vec<u32>], created_unix: u64) -> Self {
        let n = adjacency.len() as u32;
        let mut indptr = Vec::with_capacity(adjacency.len() + 1);
        indptr.push(0u64);
        let mut indices = Vec::new();
        for nbrs in adjacency {
            indices.extend_from_slice(nbrs);
            indptr.push(indices.len() as u64);
        }
        Self {
            n_nodes: n,
            created_unix,
            indptr,
            indices,
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ParseError> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut digest = crc::Digest::new();

        let mut write_and_hash = |buf: &[u8], w: &mut BufWriter<File>| -> std::io::Result<()> {
            w.write_all(buf)?;
            digest.update(buf);
            Ok(())
        };

        write_and_hash(&MAGIC.to_le_bytes(), &mut writer)?;
        write_and_hash(&VERSION.to_le_bytes(), &mut writer)?;
        write_and_hash(&0u16.to_le_bytes(), &mut writer)?; // reserved
        write_and_hash(&self.n_nodes.to_le_bytes(), &mut writer)?;
        write_and_hash(&self.n_edges().to_le_bytes(), &mut writer)?;
        write_and_hash(&self.created_unix.to_le_bytes(), &mut writer)?;

        for &offset in &self.indptr {
            write_and_hash(&offset.to_le_bytes(), &mut writer)?;
        }
        for &idx in &self.indices {
            write_and_hash(&idx.to_le_bytes(), &mut writer)?;
        }

        let checksum = digest.finalize();
        writer.write_all(&checksum.to_le_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut digest = crc::Digest::new();

        let mut header = [0u8; 24];
        reader.read_exact(&mut header).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                ParseError::Truncated("header".to_string())
            } else {
                ParseError::Io(e)
            }
        })?;
        digest.update(&header);

        let magic = u32::from_le_bytes(header[0..4].try_into().unwrap());
        if magic != MAGIC {
            return Err(ParseError::BadMagic {
                expected: MAGIC,
                found: magic,
            });
        }
        let version = u16::from_le_bytes(header[4..6].try_into().unwrap());
        if version != VERSION {
            return Err(ParseError::UnsupportedVersion(version));
        }
        let n_nodes = u32::from_le_bytes(header[8..12].try_into().unwrap());
        let n_edges = u64::from_le_bytes(header[12..20].try_into().unwrap());
        let created_unix = {
            let mut rest = [0u8; 8];
            reader.read_exact(&mut rest)?;
            digest.update(&rest);
            u64::from_le_bytes(rest)
        };

        let mut indptr = Vec::with_capacity(n_nodes as usize + 1);
        for _ in 0..=n_nodes {
            let mut buf = [0u8; 8];
            reader.read_exact(&mut buf).map_err(|_| {
                ParseError::Truncated("indptr".to_string())
            })?;
            digest.update(&buf);
            indptr.push(u64::from_le_bytes(buf));
        }
        for w in indptr.windows(2) {
            if w[0] > w[1] {
                return Err(ParseError::MalformedOffsets(format!(
                    "indptr not monotone at offset pair {:?}",
                    w
                )));
            }
        }
        if indptr.last().copied() != Some(n_edges) {
            return Err(ParseError::MalformedOffsets(format!(
                "indptr last entry {:?} does not match n_edges {}",
                indptr.last(),
                n_edges
            )));
        }

        let mut indices = Vec::with_capacity(n_edges as usize);
        for _ in 0..n_edges {
            let mut buf = [0u8; 4];
            reader.read_exact(&mut buf).map_err(|_| {
                ParseError::Truncated("indices".to_string())
            })?;
            digest.update(&buf);
            indices.push(u32::from_le_bytes(buf));
        }

        let computed = digest.finalize();
        let mut footer = [0u8; 8];
        reader.read_exact(&mut footer).map_err(|_| {
            ParseError::Truncated("checksum footer".to_string())
        })?;
        let stored = u64::from_le_bytes(footer);
        if computed != stored {
            return Err(ParseError::ChecksumMismatch { computed, stored });
        }

        Ok(CsrAdjacency {
            n_nodes,
            created_unix,
            indptr,
            indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsrAdjacency {
        // 0 -> {1, 2}, 1 -> {2}, 2 -> {}
        CsrAdjacency::from_adjacency_lists(&[vec![1, 2], vec![2], vec![]], 1_700_000_000)
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.tgcsr");
        let original = sample();
        original.write(&path).unwrap();
        let loaded = CsrAdjacency::read(&path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn rejects_a_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.tgcsr");
        sample().write(&path).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        std::fs::write(&path, bytes).unwrap();

        let err = CsrAdjacency::read(&path).unwrap_err();
        assert!(matches!(err, ParseError::ChecksumMismatch { .. }));
    }

    #[test]
    fn rejects_bad_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_graph.tgcsr");
        std::fs::write(&path, [0u8; 32]).unwrap();
        let err = CsrAdjacency::read(&path).unwrap_err();
        assert!(matches!(err, ParseError::BadMagic { .. }));
    }

    #[test]
    fn n_edges_matches_indices_len() {
        let s = sample();
        assert_eq!(s.n_edges(), 3);
        assert_eq!(*s.indptr.last().unwrap(), s.n_edges());
    }
}
