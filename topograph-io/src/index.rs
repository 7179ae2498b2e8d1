//! `.tgidx` format — persisted topic-to-id mapping.
//!
//! Stores `topic_of_id`, the total function `[0, N) -> String`; the inverse
//! `id_of_topic` is rebuilt in memory on load (`spec.md` §3 "Index").
//! Framed the same way as `csr::CsrAdjacency`: magic/version header, a
//! bincode-encoded body, and a CRC-64 footer.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crc;
use crate::parse::ParseError;

const MAGIC: u32 = u32::from_le_bytes(*b"TGIX");
const VERSION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct IndexBody {
    topic_of_id: Vec<String>,
}

/// The persisted form of the topic index: topics ordered by their dense id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicIndex {
    pub topic_of_id: Vec<String>,
}

impl TopicIndex {
    pub fn new(topic_of_id: Vec<String>) -> Self {
        Self { topic_of_id }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ParseError> {
        let body = IndexBody {
            topic_of_id: self.topic_of_id.clone(),
        };
        let encoded = bincode::serialize(&body)?;

        let mut writer = BufWriter::new(File::create(path)?);
        let mut digest = crc::Digest::new();

        let header_magic = MAGIC.to_le_bytes();
        let header_version = VERSION.to_le_bytes();
        let body_len = (encoded.len() as u64).to_le_bytes();

        writer.write_all(&header_magic)?;
        writer.write_all(&header_version)?;
        writer.write_all(&0u16.to_le_bytes())?; // reserved
        writer.write_all(&body_len)?;
        writer.write_all(&encoded)?;

        digest.update(&header_magic);
        digest.update(&header_version);
        digest.update(&0u16.to_le_bytes());
        digest.update(&body_len);
        digest.update(&encoded);

        let checksum = digest.finalize();
        writer.write_all(&checksum.to_le_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut digest = crc::Digest::new();

        let mut header = [0u8; 16];
        reader
            .read_exact(&mut header)
            .map_err(|_| ParseError::Truncated("header".to_string()))?;
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
        let body_len = u64::from_le_bytes(header[8..16].try_into().unwrap());

        let mut body = vec![0u8; body_len as usize];
        reader
            .read_exact(&mut body)
            .map_err(|_| ParseError::Truncated("body".to_string()))?;
        digest.update(&body);

        let computed = digest.finalize();
        let mut footer = [0u8; 8];
        reader
            .read_exact(&mut footer)
            .map_err(|_| ParseError::Truncated("checksum footer".to_string()))?;
        let stored = u64::from_le_bytes(footer);
        if computed != stored {
            return Err(ParseError::ChecksumMismatch { computed, stored });
        }

        let decoded: IndexBody = bincode::deserialize(&body)?;
        Ok(TopicIndex {
            topic_of_id: decoded.topic_of_id,
        })
    }
}
