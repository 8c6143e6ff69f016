use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Embedding model error: {0}")]
    Model(String),

    #[error("Unsupported embedding model: {0}")]
    UnsupportedModel(String),

    #[error("Unsupported embedding mode '{0}' (expected 'fast' or 'stub')")]
    UnsupportedMode(String),

    #[error("Embedding task error: {0}")]
    Task(String),

    #[error("Empty embedding result")]
    Empty,
}
