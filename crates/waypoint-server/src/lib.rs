//! HTTP boundary for Waypoint.
//!
//! Consumes resolutions and produces HTTP-shaped outcomes: 200 with
//! content fetched from the store, 307 with a `Location`, or 404. The
//! routing core stays transport-agnostic; everything HTTP lives here.
//!
//! # Key Types
//!
//! - [`AppState`] -- Manifest snapshot (atomically swappable), store, mode
//! - [`AssetServer`] -- Bind-and-serve loop over the router
//! - [`ServerConfig`] -- TOML-loadable bind address and HTML handling
//! - [`ServeError`] -- Boundary faults, including the manifest/store
//!   consistency violation

pub mod config;
pub mod error;
pub mod pipeline;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServeError, ServeResult};
pub use router::build_router;
pub use server::AssetServer;
pub use state::AppState;
