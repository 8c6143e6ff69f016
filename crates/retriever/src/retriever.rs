use crate::error::{Result, RetrieverError};
use ragdex_embeddings::EmbeddingProvider;
use ragdex_vector_index::VectorIndexStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for one retriever instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieverConfig {
    /// Name of the index to query
    pub index_name: String,

    /// Number of nearest-neighbor candidates requested per query
    pub top_k: usize,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            index_name: "documents".to_string(),
            top_k: 3,
        }
    }
}

/// One ranked answer chunk.
///
/// `score`, `text` and `source` are optional: an index may omit similarity
/// scores, and records upserted by other writers may lack metadata fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub id: String,
    pub score: Option<f32>,
    pub text: Option<String>,
    pub source: Option<String>,
}

/// Query-time pipeline over the shared embedding provider and index store.
pub struct Retriever {
    config: RetrieverConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorIndexStore>,
}

impl Retriever {
    pub fn new(
        config: RetrieverConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorIndexStore>,
    ) -> Self {
        Self {
            config,
            embedder,
            store,
        }
    }

    /// Retrieve the chunks nearest to `question`, in the index's
    /// descending-similarity order.
    ///
    /// Callers wanting fewer than `top_k` results truncate the returned
    /// list; that is a pure prefix of the ranking, never a re-sort.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<RetrievedChunk>> {
        if question.trim().is_empty() {
            return Err(RetrieverError::EmptyQuestion);
        }

        log::debug!(
            "Retrieving top {} chunks for question ({} chars)",
            self.config.top_k,
            question.len()
        );

        let vector = self.embedder.embed(question).await?;
        let index = self.store.index(&self.config.index_name).await?;
        let matches = index.query(&vector, self.config.top_k, false).await?;

        log::debug!("Index returned {} matches", matches.len());

        Ok(matches
            .into_iter()
            .map(|m| {
                let mut metadata = m.metadata;
                RetrievedChunk {
                    id: m.id,
                    score: m.similarity,
                    text: metadata.remove("text"),
                    source: metadata.remove("source"),
                }
            })
            .collect())
    }

    /// The configuration this retriever was built with
    #[must_use]
    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }
}
