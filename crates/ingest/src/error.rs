use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chunker error: {0}")]
    Chunker(#[from] ragdex_text_chunker::ChunkerError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] ragdex_embeddings::EmbeddingError),

    #[error("Vector index error: {0}")]
    Index(#[from] ragdex_vector_index::VectorIndexError),
}
