//! Error taxonomy for the ingestion path.

/// Errors raised while querying, extracting or persisting an email.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("remote query failed: {0}")]
    RemoteQueryFailed(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
    #[error("missing mandatory field: {0}")]
    MalformedField(&'static str),
    #[error("invalid configuration: {0}")]
    Config(String),
}
