use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorIndexError>;

#[derive(Error, Debug)]
pub enum VectorIndexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Index service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Index not found: {0}")]
    NotFound(String),

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
