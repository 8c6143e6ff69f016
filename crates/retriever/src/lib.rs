//! # Ragdex Retriever
//!
//! Query-time pipeline: embed a question with the same provider used at
//! ingestion, run a nearest-neighbor query against the configured index,
//! and format the matches.
//!
//! ```text
//! Question
//!     │
//!     ├──> EmbeddingProvider.embed
//!     │      └─> unit vector (dimension must match the index)
//!     │
//!     ├──> VectorIndex.query(top_k)
//!     │      └─> matches, descending similarity
//!     │
//!     └──> RetrievedChunk[] (id, score, text, source)
//! ```
//!
//! The retriever never re-sorts: result order is whatever the index
//! returned. Missing metadata fields become `None` instead of failing, and
//! an empty index yields an empty list.

mod error;
mod retriever;

pub use error::{Result, RetrieverError};
pub use retriever::{RetrievedChunk, Retriever, RetrieverConfig};
