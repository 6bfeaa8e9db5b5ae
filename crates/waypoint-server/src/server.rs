use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServeError, ServeResult};
use crate::router::build_router;
use crate::state::AppState;

/// Waypoint asset server.
pub struct AssetServer {
    config: ServerConfig,
    state: AppState,
}

impl AssetServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServeResult<()> {
        let app = build_router(self.state.clone());
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            mode = %self.state.mode(),
            entries = self.state.manifest().entry_count(),
            "waypoint serving assets"
        );
        axum::serve(listener, app).await.map_err(ServeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waypoint_manifest::{AssetManifest, ManifestWriter};
    use waypoint_store::MemoryContentStore;
    use waypoint_types::HtmlHandling;

    use super::*;

    #[test]
    fn server_construction() {
        let manifest = AssetManifest::load(ManifestWriter::new().finish().unwrap()).unwrap();
        let state = AppState::new(
            manifest,
            Arc::new(MemoryContentStore::new()),
            HtmlHandling::AutoTrailingSlash,
        );
        let server = AssetServer::new(ServerConfig::default(), state);
        assert_eq!(server.config().bind_addr, "127.0.0.1:8787".parse().unwrap());
        let _router = server.router();
    }
}
