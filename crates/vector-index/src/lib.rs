//! # Ragdex Vector Index
//!
//! Collaborator contract for the external vector database, plus the two
//! backends that implement it.
//!
//! ## Contract
//!
//! ```text
//! VectorIndexStore
//!     ├──> create_index(name, dimension, metric) -> Created | AlreadyExists
//!     ├──> index(name) -> VectorIndex handle
//!     └──> list_indexes() -> names
//!
//! VectorIndex
//!     ├──> upsert(records)            overwrite-by-id
//!     └──> query(vector, top_k, ..)   descending similarity
//! ```
//!
//! "Index already exists" is a tagged outcome rather than an error so
//! callers make the idempotent-creation policy explicit. Any other backend
//! failure propagates as [`VectorIndexError`].
//!
//! ## Backends
//!
//! - [`HttpIndexStore`]: REST client for the external vector database
//! - [`MemoryIndexStore`]: in-process brute-force cosine backend for tests
//!   and offline development

mod error;
mod http;
mod memory;
mod store;
mod types;

pub use error::{Result, VectorIndexError};
pub use http::HttpIndexStore;
pub use memory::MemoryIndexStore;
pub use store::{VectorIndex, VectorIndexStore};
pub use types::{CreateIndexOutcome, QueryMatch, SimilarityMetric, VectorRecord};
