//! Path resolution for Waypoint.
//!
//! Turns a decoded request pathname into a serve / redirect / not-found
//! decision by probing mode-derived candidate paths against an existence
//! oracle, then verifying that any redirect target resolves back to the
//! same asset. All of the trailing-slash, implicit-`.html`, implicit
//! `index.html`, and sibling-ambiguity behavior lives here.
//!
//! # Key Types
//!
//! - [`PathResolver`] -- The canonicalization state machine
//! - [`ExistenceOracle`] -- Injected existence capability (manifest-backed
//!   or remote)
//! - [`ManifestOracle`] / [`MemoryOracle`] -- In-process implementations
//! - [`OracleError`] -- Probe faults, propagated unmodified

pub mod candidates;
pub mod error;
pub mod oracle;
pub mod resolver;

pub use candidates::{build_candidates, canonical_path};
pub use error::{OracleError, OracleResult};
pub use oracle::{ExistenceOracle, ManifestOracle, MemoryOracle};
pub use resolver::PathResolver;
