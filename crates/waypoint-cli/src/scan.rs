use std::path::Path;

use walkdir::WalkDir;
use waypoint_manifest::{AssetManifest, ManifestWriter};
use waypoint_store::DirContentStore;
use waypoint_types::ContentKey;

/// A directory scanned into an in-memory deployment.
pub struct ScannedSite {
    pub manifest: AssetManifest,
    pub store: DirContentStore,
}

/// Walk an asset directory and build the manifest and content store the
/// production pipeline would have produced for it.
///
/// Every file becomes one manifest entry keyed by its `/`-rooted
/// relative path, hashed literally. Files with identical bytes share a
/// content key, so the store deduplicates them.
pub fn scan_site(root: &Path) -> anyhow::Result<ScannedSite> {
    let mut writer = ManifestWriter::new();
    let mut store = DirContentStore::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let bytes = std::fs::read(entry.path())?;
        let key = ContentKey::of(&bytes);
        let url_path = url_path_for(entry.path().strip_prefix(root)?);
        tracing::debug!(path = %url_path, key = %key, "scanned asset");
        writer.add(&url_path, key);
        store.register(key, entry.path().to_path_buf());
    }

    let manifest = AssetManifest::load(writer.finish()?)?;
    Ok(ScannedSite { manifest, store })
}

/// `/`-rooted request path for a relative filesystem path.
fn url_path_for(relative: &Path) -> String {
    let mut url = String::new();
    for component in relative.components() {
        url.push('/');
        url.push_str(&component.as_os_str().to_string_lossy());
    }
    url
}

#[cfg(test)]
mod tests {
    use waypoint_store::ContentStore;

    use super::*;

    #[tokio::test]
    async fn scan_builds_manifest_and_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<h1>home</h1>").unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/guide.html"), b"<h1>guide</h1>").unwrap();

        let site = scan_site(dir.path()).unwrap();
        assert_eq!(site.manifest.entry_count(), 2);

        let key = site
            .manifest
            .lookup("/docs/guide.html")
            .unwrap()
            .expect("scanned");
        let payload = site.store.get(&key).await.unwrap().expect("stored");
        assert_eq!(&payload.bytes[..], b"<h1>guide</h1>");
        assert_eq!(payload.content_type, "text/html");

        assert!(site.manifest.lookup("/docs").unwrap().is_none());
    }

    #[test]
    fn empty_directory_scans_to_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let site = scan_site(dir.path()).unwrap();
        assert!(site.manifest.is_empty());
        assert!(site.store.is_empty());
    }

    #[test]
    fn identical_files_share_a_content_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"same").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"same").unwrap();

        let site = scan_site(dir.path()).unwrap();
        assert_eq!(site.manifest.entry_count(), 2);
        assert_eq!(site.store.len(), 1);
        assert_eq!(
            site.manifest.lookup("/a.txt").unwrap(),
            site.manifest.lookup("/b.txt").unwrap()
        );
    }
}
