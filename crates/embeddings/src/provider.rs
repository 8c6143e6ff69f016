use crate::error::{EmbeddingError, Result};
use async_trait::async_trait;
use std::env;

/// Capability contract for text embedding backends.
///
/// Every vector produced by one provider has the same dimension, fixed for
/// the lifetime of the instance, and is normalized to unit length.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Dimension of every vector this provider produces
    fn dimension(&self) -> usize;

    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts; output order matches input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Which embedding backend to run, read from `RAGDEX_EMBEDDING_MODE`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmbeddingMode {
    Fast,
    Stub,
}

impl EmbeddingMode {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("RAGDEX_EMBEDDING_MODE").unwrap_or_else(|_| "fast".to_string());
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "stub" => Ok(Self::Stub),
            other => Err(EmbeddingError::UnsupportedMode(other.to_string())),
        }
    }
}
