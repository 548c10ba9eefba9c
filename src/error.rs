//! Error types for catalog queries.

/// Result type for catalog operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Failure while building or running a catalog query
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Archive request failed: {0}")]
    Transport(String),

    #[error("Archive returned HTTP status {0}")]
    Status(u16),

    #[error("Malformed archive response: {0}")]
    Malformed(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Malformed(e.to_string())
    }
}

impl From<url::ParseError> for QueryError {
    fn from(e: url::ParseError) -> Self {
        QueryError::Config(format!("invalid archive URL: {e}"))
    }
}

impl From<ureq::Error> for QueryError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => QueryError::Status(code),
            other => QueryError::Transport(other.to_string()),
        }
    }
}
