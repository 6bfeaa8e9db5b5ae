//! Binary layout of the asset manifest.
//!
//! ```text
//! [ header: HEADER_SIZE bytes ]
//! [ entry_0 ][ entry_1 ] ... [ entry_{n-1} ]
//! entry_i = [ path_hash: PATH_HASH_SIZE ][ content_key: CONTENT_KEY_SIZE ]
//! ```
//!
//! Entries are sorted ascending by path hash (byte-lexicographic) and
//! unique. Total length must equal `HEADER_SIZE + n * ENTRY_SIZE` exactly.

use waypoint_types::{CONTENT_KEY_SIZE, PATH_HASH_SIZE};

use crate::error::{ManifestError, ManifestResult};

/// Magic bytes at offset zero.
pub const MAGIC: &[u8; 4] = b"WPAM";

/// Current format version.
pub const VERSION: u32 = 1;

/// Header: magic (4) + version u32 BE (4) + entry count u64 BE (8) +
/// reserved (4).
pub const HEADER_SIZE: usize = 20;

/// Fixed size of one manifest entry.
pub const ENTRY_SIZE: usize = PATH_HASH_SIZE + CONTENT_KEY_SIZE;

/// Decoded manifest header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManifestHeader {
    pub version: u32,
    pub entry_count: u64,
}

impl ManifestHeader {
    /// Encode to the fixed wire form.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(MAGIC);
        buf[4..8].copy_from_slice(&self.version.to_be_bytes());
        buf[8..16].copy_from_slice(&self.entry_count.to_be_bytes());
        buf
    }

    /// Decode and validate the header region of a manifest blob.
    pub fn decode(data: &[u8]) -> ManifestResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(ManifestError::TruncatedHeader { actual: data.len() });
        }
        if &data[0..4] != MAGIC {
            return Err(ManifestError::InvalidMagic {
                expected: String::from_utf8_lossy(MAGIC).into(),
                actual: String::from_utf8_lossy(&data[0..4]).into(),
            });
        }
        let version = u32::from_be_bytes(data[4..8].try_into().expect("4-byte slice"));
        if version != VERSION {
            return Err(ManifestError::UnsupportedVersion(version));
        }
        let entry_count = u64::from_be_bytes(data[8..16].try_into().expect("8-byte slice"));
        Ok(Self { version, entry_count })
    }
}
