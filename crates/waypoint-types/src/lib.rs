//! Foundation types for Waypoint.
//!
//! This crate provides the identity and outcome types used throughout the
//! Waypoint asset-serving system. Every other Waypoint crate depends on
//! `waypoint-types`.
//!
//! # Key Types
//!
//! - [`PathHash`] — Fixed-width digest of a literal request path, the
//!   manifest's search key
//! - [`ContentKey`] — Fixed-width content-addressed identifier of an
//!   asset's bytes
//! - [`HtmlHandling`] — Per-deployment policy for implicit `.html` /
//!   `index.html` resolution and trailing slashes
//! - [`Resolution`] — Outcome of resolving one request path

pub mod digest;
pub mod error;
pub mod mode;
pub mod resolution;

pub use digest::{ContentKey, PathHash, CONTENT_KEY_SIZE, PATH_HASH_SIZE};
pub use error::TypeError;
pub use mode::HtmlHandling;
pub use resolution::Resolution;
