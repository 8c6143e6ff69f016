use crate::config::IngestConfig;
use crate::error::Result;
use crate::report::IngestReport;
use crate::scanner::DocumentScanner;
use ragdex_embeddings::EmbeddingProvider;
use ragdex_text_chunker::{Chunker, ChunkerConfig};
use ragdex_vector_index::{CreateIndexOutcome, SimilarityMetric, VectorIndexStore, VectorRecord};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Pipeline that turns a directory of text files into indexed vector
/// records.
pub struct IngestPipeline {
    config: IngestConfig,
    chunker: Chunker,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorIndexStore>,
}

impl IngestPipeline {
    /// Build a pipeline; fails fast on an invalid chunking configuration.
    pub fn new(
        config: IngestConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorIndexStore>,
    ) -> Result<Self> {
        let chunker = Chunker::new(ChunkerConfig::new(config.chunk_size, config.chunk_overlap))?;
        Ok(Self {
            config,
            chunker,
            embedder,
            store,
        })
    }

    /// Run one full ingestion pass.
    ///
    /// Every matching file is re-read, re-chunked and re-embedded; records
    /// keep their deterministic ids, so the index's overwrite-by-id upsert
    /// makes repeat runs a refresh rather than a duplication.
    pub async fn ingest(&self) -> Result<IngestReport> {
        let started = Instant::now();
        let mut report = IngestReport::new();

        log::info!("Starting ingestion from {}", self.config.source_dir.display());

        let dimension = self.embedder.dimension();
        match self
            .store
            .create_index(&self.config.index_name, dimension, SimilarityMetric::Cosine)
            .await?
        {
            CreateIndexOutcome::Created => {
                log::info!(
                    "Created index '{}' (dimension {dimension})",
                    self.config.index_name
                );
            }
            CreateIndexOutcome::AlreadyExists => {
                log::info!(
                    "Index '{}' already exists, continuing",
                    self.config.index_name
                );
            }
        }

        if !self.config.source_dir.exists() {
            log::warn!(
                "Source directory {} not found, nothing to ingest",
                self.config.source_dir.display()
            );
            report.elapsed_ms = elapsed_ms(started);
            return Ok(report);
        }

        let index = self.store.index(&self.config.index_name).await?;
        let files = DocumentScanner::new(&self.config.source_dir).scan().await?;

        let mut batch: Vec<VectorRecord> = Vec::new();
        for file in files {
            log::info!("Ingesting file: {}", file.name);

            let text = tokio::fs::read_to_string(&file.path).await?;
            let chunks = self.chunker.chunk(&text);
            if chunks.is_empty() {
                report.add_file(0);
                continue;
            }

            let contents: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
            let vectors = self.embedder.embed_batch(&contents).await?;

            for (chunk, vector) in chunks.iter().zip(vectors) {
                batch.push(VectorRecord {
                    id: format!("{}_{}", file.name, chunk.sequence),
                    vector,
                    metadata: HashMap::from([
                        ("text".to_string(), chunk.content.clone()),
                        ("source".to_string(), file.name.clone()),
                    ]),
                    filter: HashMap::from([
                        ("file".to_string(), file.name.clone()),
                        ("type".to_string(), "text".to_string()),
                    ]),
                });
            }

            report.add_file(chunks.len());
        }

        if batch.is_empty() {
            log::info!("No documents found to ingest");
        } else {
            let count = batch.len();
            index.upsert(batch).await?;
            log::info!(
                "Ingested {count} chunks into index '{}'",
                self.config.index_name
            );
        }

        report.elapsed_ms = elapsed_ms(started);
        Ok(report)
    }

    /// The configuration this pipeline was built with
    #[must_use]
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
