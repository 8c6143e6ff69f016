use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Similarity metric an index is created with. Ingestion always uses
/// cosine; the wire contract carries the metric explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    Cosine,
}

/// Outcome of an index-creation attempt.
///
/// `AlreadyExists` is an expected outcome, not an error: the caller decides
/// whether idempotent creation is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateIndexOutcome {
    Created,
    AlreadyExists,
}

/// The unit stored in a vector index: id, embedding, and the two string
/// bags carried alongside it. Immutable once upserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,

    pub vector: Vec<f32>,

    /// Payload returned with query matches (chunk text, source filename)
    #[serde(rename = "meta", default)]
    pub metadata: HashMap<String, String>,

    /// Attributes the index may filter on (source file, content type)
    #[serde(default)]
    pub filter: HashMap<String, String>,
}

/// One match returned by a similarity query, in descending-similarity
/// order. `similarity` is optional: backends may omit scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub id: String,

    #[serde(default)]
    pub similarity: Option<f32>,

    #[serde(rename = "meta", default)]
    pub metadata: HashMap<String, String>,
}
