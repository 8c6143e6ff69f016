use serde::{Deserialize, Serialize};

/// Summary of one ingestion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestReport {
    /// Number of files processed
    pub files: usize,

    /// Number of chunks embedded and upserted
    pub chunks: usize,

    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl IngestReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, chunks: usize) {
        self.files += 1;
        self.chunks += chunks;
    }

    /// True when the run found nothing to ingest
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks == 0
    }
}
