use waypoint_types::{ContentKey, PathHash};

use crate::error::{ManifestError, ManifestResult};
use crate::layout::{ManifestHeader, ENTRY_SIZE, HEADER_SIZE, VERSION};

/// Builds a manifest blob from (path, content key) pairs.
///
/// Entries may be added in any order; `finish` sorts them by path hash
/// and rejects duplicates, so collision detection happens at build time
/// and lookup never has to re-check.
#[derive(Default)]
pub struct ManifestWriter {
    entries: Vec<(PathHash, ContentKey)>,
}

impl ManifestWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry for a literal pathname.
    pub fn add(&mut self, path: &str, key: ContentKey) {
        self.entries.push((PathHash::of(path), key));
    }

    /// Add an entry with a pre-computed path hash.
    pub fn add_hashed(&mut self, hash: PathHash, key: ContentKey) {
        self.entries.push((hash, key));
    }

    /// Number of entries queued.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort, validate, and emit the manifest bytes.
    pub fn finish(mut self) -> ManifestResult<Vec<u8>> {
        self.entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        for pair in self.entries.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(ManifestError::DuplicatePath { hash: pair[0].0.to_hex() });
            }
        }

        let header = ManifestHeader {
            version: VERSION,
            entry_count: self.entries.len() as u64,
        };
        let mut buf = Vec::with_capacity(HEADER_SIZE + self.entries.len() * ENTRY_SIZE);
        buf.extend_from_slice(&header.encode());
        for (hash, key) in &self.entries {
            buf.extend_from_slice(hash.as_bytes());
            buf.extend_from_slice(key.as_bytes());
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_types::PATH_HASH_SIZE;

    #[test]
    fn emits_exact_length() {
        let mut writer = ManifestWriter::new();
        writer.add("/a", ContentKey::of(b"a"));
        writer.add("/b", ContentKey::of(b"b"));
        assert_eq!(writer.len(), 2);
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 2 * ENTRY_SIZE);
    }

    #[test]
    fn entries_are_sorted_by_path_hash() {
        let paths = ["/zeta", "/alpha", "/mid", "/", "/index.html"];
        let mut writer = ManifestWriter::new();
        for path in paths {
            writer.add(path, ContentKey::of(path.as_bytes()));
        }
        let bytes = writer.finish().unwrap();

        let mut previous: Option<&[u8]> = None;
        for i in 0..paths.len() {
            let start = HEADER_SIZE + i * ENTRY_SIZE;
            let hash = &bytes[start..start + PATH_HASH_SIZE];
            if let Some(prev) = previous {
                assert!(prev < hash, "entry {i} out of order");
            }
            previous = Some(hash);
        }
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let mut writer = ManifestWriter::new();
        writer.add("/same", ContentKey::of(b"one"));
        writer.add("/same", ContentKey::of(b"two"));
        let err = writer.finish().unwrap_err();
        assert!(matches!(err, ManifestError::DuplicatePath { .. }));
    }

    #[test]
    fn empty_writer_emits_bare_header() {
        let bytes = ManifestWriter::new().finish().unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
    }
}
