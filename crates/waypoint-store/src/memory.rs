use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;
use waypoint_types::ContentKey;

use crate::error::StoreResult;
use crate::traits::{AssetPayload, ContentStore};

/// In-memory, HashMap-based content store.
///
/// Intended for tests and embedding. Assets are held behind a `RwLock`
/// for safe concurrent access and cloned on read; `Bytes` makes the
/// clone a refcount bump.
#[derive(Default)]
pub struct MemoryContentStore {
    assets: RwLock<HashMap<ContentKey, AssetPayload>>,
}

impl MemoryContentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy an asset, returning its content key.
    pub fn insert(&self, bytes: impl Into<Bytes>, content_type: impl Into<String>) -> ContentKey {
        let bytes = bytes.into();
        let key = ContentKey::of(&bytes);
        self.assets.write().expect("lock poisoned").insert(
            key,
            AssetPayload {
                bytes,
                content_type: content_type.into(),
            },
        );
        key
    }

    /// Number of assets currently stored.
    pub fn len(&self) -> usize {
        self.assets.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.read().expect("lock poisoned").is_empty()
    }

    /// Remove all assets from the store.
    pub fn clear(&self) {
        self.assets.write().expect("lock poisoned").clear();
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get(&self, key: &ContentKey) -> StoreResult<Option<AssetPayload>> {
        Ok(self.assets.read().expect("lock poisoned").get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get() {
        let store = MemoryContentStore::new();
        let key = store.insert(&b"<h1>hi</h1>"[..], "text/html");
        let payload = store.get(&key).await.unwrap().expect("present");
        assert_eq!(payload.bytes, Bytes::from_static(b"<h1>hi</h1>"));
        assert_eq!(payload.content_type, "text/html");
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryContentStore::new();
        let absent = ContentKey::of(b"never deployed");
        assert_eq!(store.get(&absent).await.unwrap(), None);
    }

    #[tokio::test]
    async fn identical_content_deduplicates() {
        let store = MemoryContentStore::new();
        let a = store.insert(&b"same"[..], "text/plain");
        let b = store.insert(&b"same"[..], "text/plain");
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }
}
