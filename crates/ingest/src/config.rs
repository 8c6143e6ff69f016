use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one ingestion pipeline instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Flat directory scanned for plain-text documents
    pub source_dir: PathBuf,

    /// Name of the target index
    pub index_name: String,

    /// Chunk window size in characters
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("data"),
            index_name: "documents".to_string(),
            chunk_size: 300,
            chunk_overlap: 50,
        }
    }
}
