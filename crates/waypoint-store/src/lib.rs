//! Content-addressed asset stores for Waypoint.
//!
//! A resolution's `Serve` outcome carries only a content key; these
//! stores turn the key back into bytes and a content type. The store is
//! an external collaborator of the routing core — the resolver never
//! touches it.
//!
//! # Key Types
//!
//! - [`ContentStore`] -- Retrieval capability, sync or remote-backed
//! - [`AssetPayload`] -- Bytes plus deploy-time content type
//! - [`MemoryContentStore`] -- HashMap-backed, for tests and embedding
//! - [`DirContentStore`] -- Directory-backed, for the dev server

pub mod dir;
pub mod error;
pub mod memory;
pub mod traits;

pub use dir::DirContentStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryContentStore;
pub use traits::{AssetPayload, ContentStore};
