use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width of a path digest in bytes.
pub const PATH_HASH_SIZE: usize = 16;

/// Width of a content key in bytes.
pub const CONTENT_KEY_SIZE: usize = 16;

/// Domain tags keep the path and content key spaces disjoint: hashing a
/// pathname and hashing file bytes that happen to contain that pathname
/// can never produce the same digest.
const PATH_DOMAIN: &str = "waypoint-path-v1";
const CONTENT_DOMAIN: &str = "waypoint-content-v1";

fn tagged_hash(domain: &str, data: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain.as_bytes());
    hasher.update(b":");
    hasher.update(data);
    *hasher.finalize().as_bytes()
}

/// Fixed-width digest of a literal request path.
///
/// A `PathHash` is the truncated BLAKE3 hash of a pathname taken exactly
/// as given — no decoding, no normalization. A file literally named
/// `/bin%2F` therefore hashes to a different key than `/bin/`. Path
/// hashes are the manifest's sort and search keys; the build step is
/// responsible for rejecting collisions within one manifest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathHash([u8; PATH_HASH_SIZE]);

impl PathHash {
    /// Compute the digest of a literal pathname.
    pub fn of(path: &str) -> Self {
        let full = tagged_hash(PATH_DOMAIN, path.as_bytes());
        let mut arr = [0u8; PATH_HASH_SIZE];
        arr.copy_from_slice(&full[..PATH_HASH_SIZE]);
        Self(arr)
    }

    /// Wrap a pre-computed digest.
    pub const fn from_hash(hash: [u8; PATH_HASH_SIZE]) -> Self {
        Self(hash)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; PATH_HASH_SIZE] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathHash({})", hex::encode(&self.0[..4]))
    }
}

impl From<[u8; PATH_HASH_SIZE]> for PathHash {
    fn from(bytes: [u8; PATH_HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Content-addressed identifier of an asset's bytes.
///
/// Identical content always produces the same `ContentKey`, so deployed
/// files are deduplicatable and a key is sufficient to retrieve the bytes
/// from the content store. Rendered as hex at HTTP and storage
/// boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey([u8; CONTENT_KEY_SIZE]);

impl ContentKey {
    /// Compute the key for a blob of asset bytes.
    pub fn of(data: &[u8]) -> Self {
        let full = tagged_hash(CONTENT_DOMAIN, data);
        let mut arr = [0u8; CONTENT_KEY_SIZE];
        arr.copy_from_slice(&full[..CONTENT_KEY_SIZE]);
        Self(arr)
    }

    /// Wrap a pre-computed key.
    pub const fn from_hash(hash: [u8; CONTENT_KEY_SIZE]) -> Self {
        Self(hash)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; CONTENT_KEY_SIZE] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != CONTENT_KEY_SIZE {
            return Err(TypeError::InvalidLength {
                expected: CONTENT_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; CONTENT_KEY_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; CONTENT_KEY_SIZE]> for ContentKey {
    fn from(bytes: [u8; CONTENT_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}
