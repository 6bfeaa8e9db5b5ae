use std::sync::{Arc, RwLock};

use waypoint_manifest::AssetManifest;
use waypoint_resolver::{ManifestOracle, PathResolver};
use waypoint_store::ContentStore;
use waypoint_types::HtmlHandling;

/// Shared server state: the live manifest snapshot, the content store,
/// and the deployment's HTML-handling mode.
///
/// A new deployment swaps the manifest `Arc` atomically; requests
/// already in flight keep resolving against the snapshot they cloned,
/// so no resolution ever observes a manifest mid-update.
#[derive(Clone)]
pub struct AppState {
    manifest: Arc<RwLock<Arc<AssetManifest>>>,
    store: Arc<dyn ContentStore>,
    mode: HtmlHandling,
}

impl AppState {
    pub fn new(manifest: AssetManifest, store: Arc<dyn ContentStore>, mode: HtmlHandling) -> Self {
        Self {
            manifest: Arc::new(RwLock::new(Arc::new(manifest))),
            store,
            mode,
        }
    }

    /// The current manifest snapshot.
    pub fn manifest(&self) -> Arc<AssetManifest> {
        self.manifest.read().expect("lock poisoned").clone()
    }

    /// Replace the manifest for a new deployment.
    pub fn swap_manifest(&self, next: AssetManifest) {
        let entries = next.entry_count();
        *self.manifest.write().expect("lock poisoned") = Arc::new(next);
        tracing::info!(entries, "manifest swapped");
    }

    /// A resolver over the current snapshot.
    pub fn resolver(&self) -> PathResolver {
        let oracle = ManifestOracle::new(self.manifest());
        PathResolver::new(Arc::new(oracle), self.mode)
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    pub fn mode(&self) -> HtmlHandling {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use waypoint_manifest::ManifestWriter;
    use waypoint_store::MemoryContentStore;
    use waypoint_types::ContentKey;

    use super::*;

    fn manifest_of(paths: &[&str]) -> AssetManifest {
        let mut writer = ManifestWriter::new();
        for path in paths {
            writer.add(path, ContentKey::of(path.as_bytes()));
        }
        AssetManifest::load(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn swap_replaces_the_snapshot() {
        let state = AppState::new(
            manifest_of(&["/old.html"]),
            Arc::new(MemoryContentStore::new()),
            HtmlHandling::AutoTrailingSlash,
        );
        let before = state.manifest();
        assert_eq!(before.entry_count(), 1);

        state.swap_manifest(manifest_of(&["/new.html", "/index.html"]));
        assert_eq!(state.manifest().entry_count(), 2);
        // the old snapshot is still intact for in-flight requests
        assert_eq!(before.entry_count(), 1);
    }
}
