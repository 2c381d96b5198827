use thiserror::Error;

/// Errors that can occur when validating a new event submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}
