//! # Ragdex Ingest
//!
//! Document ingestion pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! Source directory (*.txt, flat)
//!     │
//!     ├──> DocumentScanner
//!     │      └─> files, sorted by name
//!     │
//!     ├──> Chunker (fixed size + overlap)
//!     │      └─> TextChunk[] per file
//!     │
//!     ├──> EmbeddingProvider (one batch per file)
//!     │      └─> unit vectors
//!     │
//!     └──> VectorIndex.upsert (one batch per run)
//!            └─> records "<filename>_<sequence>"
//! ```
//!
//! Index creation is idempotent: an existing index is logged and reused. A
//! missing source directory completes as zero work, not an error. Re-running
//! re-embeds every file and overwrites records by id; the pipeline performs
//! no change tracking of its own.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ragdex_embeddings::StubProvider;
//! use ragdex_ingest::{IngestConfig, IngestPipeline};
//! use ragdex_vector_index::MemoryIndexStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = IngestPipeline::new(
//!         IngestConfig::default(),
//!         Arc::new(StubProvider::new(384)),
//!         Arc::new(MemoryIndexStore::new()),
//!     )?;
//!
//!     let report = pipeline.ingest().await?;
//!     println!("Ingested {} chunks from {} files", report.chunks, report.files);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod pipeline;
mod report;
mod scanner;

pub use config::IngestConfig;
pub use error::{IngestError, Result};
pub use pipeline::IngestPipeline;
pub use report::IngestReport;
pub use scanner::{DocumentFile, DocumentScanner};
