use ragdex_embeddings::{EmbeddingProvider, StubProvider};
use ragdex_ingest::{IngestConfig, IngestPipeline};
use ragdex_text_chunker::{Chunker, ChunkerConfig};
use ragdex_vector_index::{MemoryIndexStore, VectorIndexStore};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const DIMENSION: usize = 16;
const CHUNK_SIZE: usize = 20;
const CHUNK_OVERLAP: usize = 5;

fn pipeline(source_dir: &Path, store: &Arc<MemoryIndexStore>) -> IngestPipeline {
    let config = IngestConfig {
        source_dir: source_dir.to_path_buf(),
        index_name: "documents".to_string(),
        chunk_size: CHUNK_SIZE,
        chunk_overlap: CHUNK_OVERLAP,
    };
    IngestPipeline::new(
        config,
        Arc::new(StubProvider::new(DIMENSION)),
        Arc::clone(store) as Arc<dyn VectorIndexStore>,
    )
    .expect("valid pipeline config")
}

/// All record ids currently in the index, fetched via an oversized query.
async fn all_ids(store: &MemoryIndexStore) -> BTreeSet<String> {
    let index = store.index("documents").await.expect("index exists");
    let probe = StubProvider::new(DIMENSION)
        .embed("probe")
        .await
        .expect("probe vector");
    index
        .query(&probe, 1000, false)
        .await
        .expect("query")
        .into_iter()
        .map(|m| m.id)
        .collect()
}

#[tokio::test]
async fn ingesting_empty_directory_is_zero_work() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryIndexStore::new());

    let report = pipeline(dir.path(), &store).ingest().await.unwrap();

    assert_eq!(report.files, 0);
    assert_eq!(report.chunks, 0);
    assert!(report.is_empty());

    // Index creation is the only mutation.
    assert_eq!(store.list_indexes().await.unwrap(), vec!["documents"]);
    assert!(all_ids(&store).await.is_empty());
}

#[tokio::test]
async fn ingesting_missing_directory_is_reported_not_failed() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let store = Arc::new(MemoryIndexStore::new());

    let report = pipeline(&missing, &store).ingest().await.unwrap();

    assert!(report.is_empty());
    // The index is still ensured before the directory check.
    assert_eq!(store.list_indexes().await.unwrap(), vec!["documents"]);
}

#[tokio::test]
async fn non_text_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join("notes.md"), "markdown, not ingested")
        .await
        .unwrap();
    tokio::fs::write(dir.path().join("a.txt"), "short note")
        .await
        .unwrap();
    let store = Arc::new(MemoryIndexStore::new());

    let report = pipeline(dir.path(), &store).ingest().await.unwrap();

    assert_eq!(report.files, 1);
    assert_eq!(all_ids(&store).await, BTreeSet::from(["a.txt_0".to_string()]));
}

#[tokio::test]
async fn records_get_deterministic_ids_and_source_metadata() {
    let dir = TempDir::new().unwrap();
    // Shorter than the chunk stride: exactly one chunk.
    tokio::fs::write(dir.path().join("a.txt"), "tiny document")
        .await
        .unwrap();
    let b_text = "The quick brown fox jumps over the lazy dog near the riverbank.";
    tokio::fs::write(dir.path().join("b.txt"), b_text).await.unwrap();
    let store = Arc::new(MemoryIndexStore::new());

    let report = pipeline(dir.path(), &store).ingest().await.unwrap();

    // The pipeline produces exactly what the chunker says it should.
    let chunker = Chunker::new(ChunkerConfig::new(CHUNK_SIZE, CHUNK_OVERLAP)).unwrap();
    let b_chunks = chunker.chunk(b_text);
    assert_eq!(report.files, 2);
    assert_eq!(report.chunks, 1 + b_chunks.len());

    let mut expected = BTreeSet::from(["a.txt_0".to_string()]);
    for chunk in &b_chunks {
        expected.insert(format!("b.txt_{}", chunk.sequence));
    }
    assert_eq!(all_ids(&store).await, expected);

    // Metadata carries the chunk text and its source filename.
    let index = store.index("documents").await.unwrap();
    let embedder = StubProvider::new(DIMENSION);
    let vector = embedder.embed("tiny document").await.unwrap();
    let matches = index.query(&vector, 1, false).await.unwrap();

    assert_eq!(matches[0].id, "a.txt_0");
    assert_eq!(matches[0].metadata["text"], "tiny document");
    assert_eq!(matches[0].metadata["source"], "a.txt");
}

#[tokio::test]
async fn reingesting_unchanged_files_reuses_identifiers() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join("a.txt"), "stable contents")
        .await
        .unwrap();
    let store = Arc::new(MemoryIndexStore::new());
    let pipeline = pipeline(dir.path(), &store);

    pipeline.ingest().await.unwrap();
    let first = all_ids(&store).await;

    let report = pipeline.ingest().await.unwrap();
    let second = all_ids(&store).await;

    assert_eq!(first, second);
    assert_eq!(report.chunks, 1);
}

#[tokio::test]
async fn unreadable_file_content_propagates() {
    let dir = TempDir::new().unwrap();
    // Invalid UTF-8 makes read_to_string fail; the pipeline must not
    // swallow it.
    tokio::fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd])
        .await
        .unwrap();
    let store = Arc::new(MemoryIndexStore::new());

    let result = pipeline(dir.path(), &store).ingest().await;
    assert!(result.is_err());
}
