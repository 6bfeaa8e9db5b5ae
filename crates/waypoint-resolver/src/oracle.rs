use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use waypoint_manifest::AssetManifest;
use waypoint_types::ContentKey;

use crate::error::OracleResult;

/// Existence capability over the deployed asset set.
///
/// All implementations must satisfy these invariants:
/// - The path is probed exactly as given: no decoding, no normalization.
///   Canonicalization is the resolver's job, never the oracle's.
/// - `Ok(None)` means "not a deployed asset"; transport or storage faults
///   are errors, never conflated with a miss.
/// - Probes are point lookups: short, self-contained, and safe to issue
///   concurrently. They may suspend (a remote index), so the contract is
///   async even for in-process backends.
#[async_trait]
pub trait ExistenceOracle: Send + Sync {
    /// Probe a literal path, returning the matched content key if the
    /// path is a deployed asset.
    async fn exists(&self, path: &str) -> OracleResult<Option<ContentKey>>;
}

/// Oracle backed by an in-process [`AssetManifest`] snapshot.
pub struct ManifestOracle {
    manifest: Arc<AssetManifest>,
}

impl ManifestOracle {
    pub fn new(manifest: Arc<AssetManifest>) -> Self {
        Self { manifest }
    }
}

#[async_trait]
impl ExistenceOracle for ManifestOracle {
    async fn exists(&self, path: &str) -> OracleResult<Option<ContentKey>> {
        Ok(self.manifest.lookup(path)?)
    }
}

/// In-memory oracle over a fixed set of literal paths.
///
/// Deterministic stand-in for a manifest in unit tests and the dev
/// server: each path's key is derived from the path itself, so distinct
/// files always carry distinct keys.
#[derive(Default)]
pub struct MemoryOracle {
    files: HashMap<String, ContentKey>,
}

impl MemoryOracle {
    /// Build an oracle where each listed path exists.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut oracle = Self::default();
        for path in paths {
            oracle.insert(path, ContentKey::of(path.as_bytes()));
        }
        oracle
    }

    /// Register a path with an explicit content key.
    pub fn insert(&mut self, path: &str, key: ContentKey) {
        self.files.insert(path.to_string(), key);
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no paths are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl ExistenceOracle for MemoryOracle {
    async fn exists(&self, path: &str) -> OracleResult<Option<ContentKey>> {
        Ok(self.files.get(path).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_manifest::ManifestWriter;

    #[tokio::test]
    async fn memory_oracle_probes_literally() {
        let oracle = MemoryOracle::from_paths(["/bin%2F"]);
        assert!(oracle.exists("/bin%2F").await.unwrap().is_some());
        assert!(oracle.exists("/bin/").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn manifest_oracle_delegates_to_lookup() {
        let mut writer = ManifestWriter::new();
        writer.add("/index.html", ContentKey::of(b"home"));
        let manifest = AssetManifest::load(writer.finish().unwrap()).unwrap();
        let oracle = ManifestOracle::new(Arc::new(manifest));

        assert_eq!(
            oracle.exists("/index.html").await.unwrap(),
            Some(ContentKey::of(b"home"))
        );
        assert_eq!(oracle.exists("/other.html").await.unwrap(), None);
    }
}
