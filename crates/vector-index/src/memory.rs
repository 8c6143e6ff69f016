use crate::error::{Result, VectorIndexError};
use crate::store::{VectorIndex, VectorIndexStore};
use crate::types::{CreateIndexOutcome, QueryMatch, SimilarityMetric, VectorRecord};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process vector store for tests and offline development.
///
/// Brute-force cosine search over every stored record; suitable for small
/// datasets. Enforces the same dimension contract a real backend would:
/// upserting or querying a vector of the wrong length is an explicit
/// [`VectorIndexError::InvalidDimension`].
#[derive(Clone, Default)]
pub struct MemoryIndexStore {
    indexes: Arc<RwLock<HashMap<String, IndexData>>>,
}

struct IndexData {
    dimension: usize,
    records: HashMap<String, VectorRecord>,
}

impl MemoryIndexStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorIndexStore for MemoryIndexStore {
    async fn create_index(
        &self,
        name: &str,
        dimension: usize,
        _metric: SimilarityMetric,
    ) -> Result<CreateIndexOutcome> {
        let mut indexes = self.indexes.write().await;
        if indexes.contains_key(name) {
            return Ok(CreateIndexOutcome::AlreadyExists);
        }

        indexes.insert(
            name.to_string(),
            IndexData {
                dimension,
                records: HashMap::new(),
            },
        );
        log::debug!("Created in-memory index '{name}' (dimension {dimension})");
        Ok(CreateIndexOutcome::Created)
    }

    async fn index(&self, name: &str) -> Result<Box<dyn VectorIndex>> {
        let indexes = self.indexes.read().await;
        if !indexes.contains_key(name) {
            return Err(VectorIndexError::NotFound(name.to_string()));
        }

        Ok(Box::new(MemoryIndex {
            store: self.indexes.clone(),
            name: name.to_string(),
        }))
    }

    async fn list_indexes(&self) -> Result<Vec<String>> {
        let indexes = self.indexes.read().await;
        let mut names: Vec<String> = indexes.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

struct MemoryIndex {
    store: Arc<RwLock<HashMap<String, IndexData>>>,
    name: String,
}

#[async_trait]
impl VectorIndex for MemoryIndex {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<()> {
        let mut indexes = self.store.write().await;
        let data = indexes
            .get_mut(&self.name)
            .ok_or_else(|| VectorIndexError::NotFound(self.name.clone()))?;

        for record in records {
            if record.vector.len() != data.dimension {
                return Err(VectorIndexError::InvalidDimension {
                    expected: data.dimension,
                    actual: record.vector.len(),
                });
            }
            data.records.insert(record.id.clone(), record);
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        _include_vectors: bool,
    ) -> Result<Vec<QueryMatch>> {
        let indexes = self.store.read().await;
        let data = indexes
            .get(&self.name)
            .ok_or_else(|| VectorIndexError::NotFound(self.name.clone()))?;

        if vector.len() != data.dimension {
            return Err(VectorIndexError::InvalidDimension {
                expected: data.dimension,
                actual: vector.len(),
            });
        }

        let mut scored: Vec<(f32, &VectorRecord)> = data
            .records
            .values()
            .map(|record| (cosine_similarity(vector, &record.vector), record))
            .collect();

        // Descending similarity, id as the tie-breaker for determinism.
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(score, record)| QueryMatch {
                id: record.id.clone(),
                similarity: Some(score),
                metadata: record.metadata.clone(),
            })
            .collect())
    }
}

/// Cosine similarity in [-1, 1]; zero vectors compare as 0.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
