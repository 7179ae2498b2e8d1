//! CRC-64-ISO checksum utilities, shared by every artifact format in this crate.

use crc::{Crc, CRC_64_GO_ISO};

/// CRC-64-ISO algorithm, matching the checksum used by the teacher's own
/// `nbg.csr` binary format.
pub const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

/// Incremental CRC-64 digest.
pub struct Digest {
    digest: crc::Digest<'static, u64>,
}

impl Digest {
    pub fn new() -> Self {
        Self {
            digest: CRC64.digest(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    pub fn finalize(self) -> u64 {
        self.digest.finalize()
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}
