use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    /// The manifest resolved a key the content store does not hold.
    /// Manifest/store disagreement is an internal fault, never a routing
    /// 404.
    #[error("content key {key} resolved but absent from the content store")]
    ContentMissing { key: String },

    #[error("existence probe failed: {0}")]
    Oracle(#[from] waypoint_resolver::OracleError),

    #[error("content store failure: {0}")]
    Store(#[from] waypoint_store::StoreError),

    #[error("manifest error: {0}")]
    Manifest(#[from] waypoint_manifest::ManifestError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("response build error: {0}")]
    Http(#[from] axum::http::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServeError {
    /// HTTP status this fault surfaces as. External collaborators
    /// (existence index, content store) map to 502; everything else is
    /// an internal 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Oracle(waypoint_resolver::OracleError::Unavailable(_)) | Self::Store(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for the manifest/store consistency violation.
    pub fn is_consistency_violation(&self) -> bool {
        matches!(self, Self::ContentMissing { .. })
    }
}

pub type ServeResult<T> = Result<T, ServeError>;
