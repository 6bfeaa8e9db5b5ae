use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use waypoint_types::ContentKey;

use crate::error::StoreResult;
use crate::traits::{AssetPayload, ContentStore};

/// Content store over files on disk.
///
/// Maps content keys to file paths; bytes are read lazily on retrieval.
/// The content type is derived from the original filename's extension at
/// registration time, so a file reached through its content key still
/// serves with the type it was deployed under. This is the dev-server
/// backing: a directory scan registers every file here and in the
/// manifest in one pass.
#[derive(Default)]
pub struct DirContentStore {
    files: HashMap<ContentKey, Entry>,
}

#[derive(Clone, Debug)]
struct Entry {
    path: PathBuf,
    content_type: String,
}

impl DirContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file under its content key, deriving the content type
    /// from the filename.
    pub fn register(&mut self, key: ContentKey, path: PathBuf) {
        let content_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        self.files.insert(key, Entry { path, content_type });
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no files are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl ContentStore for DirContentStore {
    async fn get(&self, key: &ContentKey) -> StoreResult<Option<AssetPayload>> {
        let Some(entry) = self.files.get(key) else {
            return Ok(None);
        };
        let bytes = tokio::fs::read(&entry.path).await?;
        Ok(Some(AssetPayload {
            bytes: Bytes::from(bytes),
            content_type: entry.content_type.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registered_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, b"<html></html>").unwrap();

        let key = ContentKey::of(b"<html></html>");
        let mut store = DirContentStore::new();
        store.register(key, path);

        let payload = store.get(&key).await.unwrap().expect("present");
        assert_eq!(payload.bytes, Bytes::from_static(b"<html></html>"));
        assert_eq!(payload.content_type, "text/html");
    }

    #[tokio::test]
    async fn unknown_extension_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.weird");
        std::fs::write(&path, b"\x00\x01").unwrap();

        let key = ContentKey::of(b"\x00\x01");
        let mut store = DirContentStore::new();
        store.register(key, path);

        let payload = store.get(&key).await.unwrap().expect("present");
        assert_eq!(payload.content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn unregistered_key_is_none() {
        let store = DirContentStore::new();
        assert!(store
            .get(&ContentKey::of(b"missing"))
            .await
            .unwrap()
            .is_none());
    }
}
