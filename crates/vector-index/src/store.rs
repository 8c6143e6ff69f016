use crate::error::Result;
use crate::types::{CreateIndexOutcome, QueryMatch, SimilarityMetric, VectorRecord};
use async_trait::async_trait;

/// Capability contract for a vector database.
#[async_trait]
pub trait VectorIndexStore: Send + Sync {
    /// Attempt to create an index.
    ///
    /// Returns [`CreateIndexOutcome::AlreadyExists`] when an index of that
    /// name is already present; every other failure is an error.
    async fn create_index(
        &self,
        name: &str,
        dimension: usize,
        metric: SimilarityMetric,
    ) -> Result<CreateIndexOutcome>;

    /// Handle to a named index
    async fn index(&self, name: &str) -> Result<Box<dyn VectorIndex>>;

    /// Names of all indexes in the store
    async fn list_indexes(&self) -> Result<Vec<String>>;
}

/// Handle to one index inside a [`VectorIndexStore`].
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert records, overwriting any record with the same id
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<()>;

    /// Nearest-neighbor query.
    ///
    /// Returns at most `top_k` matches in descending-similarity order.
    /// `include_vectors` asks the backend to ship raw vectors with the
    /// response; the pipelines never need them.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_vectors: bool,
    ) -> Result<Vec<QueryMatch>>;
}
