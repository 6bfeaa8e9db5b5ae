use async_trait::async_trait;
use bytes::Bytes;
use waypoint_types::ContentKey;

use crate::error::StoreResult;

/// A retrievable asset: its bytes and the content type recorded for it
/// at deploy time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPayload {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Content-addressed asset store.
///
/// All implementations must satisfy these invariants:
/// - Assets are immutable once deployed: a content key always retrieves
///   the same bytes, or nothing.
/// - `Ok(None)` means the key is absent; I/O failures are errors and are
///   never silently swallowed.
/// - Concurrent reads are always safe.
/// - The store never interprets asset contents — retrieval is a pure
///   key-to-bytes lookup.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Retrieve an asset by its content key.
    async fn get(&self, key: &ContentKey) -> StoreResult<Option<AssetPayload>>;
}
