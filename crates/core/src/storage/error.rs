use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The remote collection rejected the operation. Display is the remote
    /// message verbatim so the create flow can surface it unchanged.
    #[error("{0}")]
    Rejected(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Pure function, no side effects:
///
/// - `Rejected` -> 500 (the remote collection failed the operation)
/// - `ConnectionFailed` -> 502 (Bad Gateway)
/// - `Serialization` -> 500
/// - `InvalidData` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Rejected(_) => 500,
        RepositoryError::ConnectionFailed(_) => 502,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::NotFound { .. } => 404,
    }
}
