use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest truncated: {actual} bytes is shorter than the header")]
    TruncatedHeader { actual: usize },

    #[error("invalid manifest magic: expected {expected}, got {actual}")]
    InvalidMagic { expected: String, actual: String },

    #[error("unsupported manifest version: {0}")]
    UnsupportedVersion(u32),

    #[error("manifest body is not a whole number of entries: {trailing} trailing bytes")]
    MisalignedEntries { trailing: usize },

    #[error("header declares {declared} entries but body holds {actual}")]
    EntryCountMismatch { declared: u64, actual: u64 },

    #[error("duplicate path hash in manifest: {hash}")]
    DuplicatePath { hash: String },

    #[error("digest width mismatch: expected {expected} bytes, got {actual}")]
    DigestWidthMismatch { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
