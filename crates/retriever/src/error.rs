use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrieverError>;

#[derive(Error, Debug)]
pub enum RetrieverError {
    #[error("Empty question")]
    EmptyQuestion,

    #[error("Embedding error: {0}")]
    Embedding(#[from] ragdex_embeddings::EmbeddingError),

    #[error("Vector index error: {0}")]
    Index(#[from] ragdex_vector_index::VectorIndexError),
}
