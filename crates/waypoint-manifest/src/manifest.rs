use std::cmp::Ordering;
use std::path::Path;

use waypoint_types::{ContentKey, PathHash, CONTENT_KEY_SIZE, PATH_HASH_SIZE};

use crate::error::{ManifestError, ManifestResult};
use crate::layout::{ManifestHeader, ENTRY_SIZE, HEADER_SIZE};

/// An immutable, loaded asset manifest.
///
/// Produced once per deployment by the build step and loaded once per
/// worker instance; it is never mutated in place — a new deployment
/// replaces the whole manifest. Lookups are read-only and safe to run
/// concurrently without locks.
#[derive(Debug)]
pub struct AssetManifest {
    data: Vec<u8>,
    header: ManifestHeader,
}

impl AssetManifest {
    /// Load a manifest from its raw bytes, validating structure.
    ///
    /// Structural errors are fatal: a worker must not start serving with
    /// a corrupt manifest.
    pub fn load(data: Vec<u8>) -> ManifestResult<Self> {
        let header = ManifestHeader::decode(&data)?;
        let body = data.len() - HEADER_SIZE;
        if body % ENTRY_SIZE != 0 {
            return Err(ManifestError::MisalignedEntries { trailing: body % ENTRY_SIZE });
        }
        let actual = (body / ENTRY_SIZE) as u64;
        if actual != header.entry_count {
            return Err(ManifestError::EntryCountMismatch {
                declared: header.entry_count,
                actual,
            });
        }
        Ok(Self { data, header })
    }

    /// Load a manifest from disk.
    pub fn open(path: &Path) -> ManifestResult<Self> {
        Self::load(std::fs::read(path)?)
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.header.entry_count as usize
    }

    /// Returns `true` if the manifest maps no paths.
    pub fn is_empty(&self) -> bool {
        self.header.entry_count == 0
    }

    /// The decoded header.
    pub fn header(&self) -> &ManifestHeader {
        &self.header
    }

    /// Look up the content key for a literal request path.
    ///
    /// The path is hashed exactly as given. Returns `Ok(None)` when no
    /// entry matches; a digest-width violation inside the search is an
    /// internal error, surfaced distinctly.
    pub fn lookup(&self, path: &str) -> ManifestResult<Option<ContentKey>> {
        let digest = PathHash::of(path);
        let (slot, comparisons) = self.search(&digest)?;
        tracing::trace!(path, comparisons, hit = slot.is_some(), "manifest probe");
        Ok(slot.map(|i| self.content_key_at(i)))
    }

    /// Binary search over the sorted entry region.
    ///
    /// Iterative index-bound narrowing over the fixed buffer: no
    /// sub-range copies, at most floor(log2 n) + 1 digest comparisons.
    /// Also returns the comparison count, which is trace-logged by
    /// `lookup`.
    fn search(&self, digest: &PathHash) -> ManifestResult<(Option<usize>, u32)> {
        let mut lo = 0usize;
        let mut hi = self.entry_count();
        let mut comparisons = 0u32;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            comparisons += 1;
            match compare_digests(digest.as_bytes(), self.path_hash_at(mid))? {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return Ok((Some(mid), comparisons)),
            }
        }
        Ok((None, comparisons))
    }

    fn path_hash_at(&self, index: usize) -> &[u8] {
        let start = HEADER_SIZE + index * ENTRY_SIZE;
        &self.data[start..start + PATH_HASH_SIZE]
    }

    fn content_key_at(&self, index: usize) -> ContentKey {
        let start = HEADER_SIZE + index * ENTRY_SIZE + PATH_HASH_SIZE;
        let mut key = [0u8; CONTENT_KEY_SIZE];
        key.copy_from_slice(&self.data[start..start + CONTENT_KEY_SIZE]);
        ContentKey::from_hash(key)
    }
}

/// Byte-lexicographic digest comparison.
///
/// Widths must already agree; a mismatch means the manifest format and
/// the hasher disagree, which is a build/format bug and never a normal
/// "not found".
fn compare_digests(search: &[u8], entry: &[u8]) -> ManifestResult<Ordering> {
    if search.len() != entry.len() {
        return Err(ManifestError::DigestWidthMismatch {
            expected: search.len(),
            actual: entry.len(),
        });
    }
    Ok(search.cmp(entry))
}
