use thiserror::Error;

/// Errors from existence probes.
///
/// The resolver propagates these unmodified; retry and timeout policy
/// belong to the oracle's backing implementation.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Manifest(#[from] waypoint_manifest::ManifestError),

    #[error("existence index unavailable: {0}")]
    Unavailable(String),
}

pub type OracleResult<T> = Result<T, OracleError>;
