use ragdex_embeddings::{EmbeddingProvider, StubProvider};
use ragdex_retriever::{Retriever, RetrieverConfig, RetrieverError};
use ragdex_vector_index::{
    MemoryIndexStore, SimilarityMetric, VectorIndexStore, VectorRecord,
};
use std::collections::HashMap;
use std::sync::Arc;

const DIMENSION: usize = 16;

async fn seeded_store(texts: &[(&str, &str)]) -> Arc<MemoryIndexStore> {
    let store = Arc::new(MemoryIndexStore::new());
    store
        .create_index("documents", DIMENSION, SimilarityMetric::Cosine)
        .await
        .unwrap();

    let embedder = StubProvider::new(DIMENSION);
    let mut records = Vec::new();
    for (id, text) in texts {
        records.push(VectorRecord {
            id: (*id).to_string(),
            vector: embedder.embed(text).await.unwrap(),
            metadata: HashMap::from([
                ("text".to_string(), (*text).to_string()),
                ("source".to_string(), format!("{id}.txt")),
            ]),
            filter: HashMap::new(),
        });
    }

    let index = store.index("documents").await.unwrap();
    index.upsert(records).await.unwrap();
    store
}

fn retriever(store: &Arc<MemoryIndexStore>, top_k: usize) -> Retriever {
    Retriever::new(
        RetrieverConfig {
            index_name: "documents".to_string(),
            top_k,
        },
        Arc::new(StubProvider::new(DIMENSION)),
        Arc::clone(store) as Arc<dyn VectorIndexStore>,
    )
}

#[tokio::test]
async fn retrieve_returns_exact_match_first() {
    let store = seeded_store(&[
        ("a", "football transfer news"),
        ("b", "vector database internals"),
        ("c", "gardening tips for spring"),
    ])
    .await;

    let results = retriever(&store, 3)
        .retrieve("vector database internals")
        .await
        .unwrap();

    assert_eq!(results[0].id, "b");
    assert!((results[0].score.unwrap() - 1.0).abs() < 1e-5);
    assert_eq!(results[0].text.as_deref(), Some("vector database internals"));
    assert_eq!(results[0].source.as_deref(), Some("b.txt"));
}

#[tokio::test]
async fn scores_are_non_increasing() {
    let store = seeded_store(&[
        ("a", "alpha"),
        ("b", "bravo"),
        ("c", "charlie"),
        ("d", "delta"),
        ("e", "echo"),
    ])
    .await;

    let results = retriever(&store, 5).retrieve("alpha").await.unwrap();

    assert_eq!(results.len(), 5);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn top_k_bounds_the_result_count() {
    let store = seeded_store(&[
        ("a", "alpha"),
        ("b", "bravo"),
        ("c", "charlie"),
        ("d", "delta"),
        ("e", "echo"),
    ])
    .await;

    let results = retriever(&store, 3).retrieve("anything at all").await.unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn truncation_is_a_pure_prefix() {
    let store = seeded_store(&[
        ("a", "alpha"),
        ("b", "bravo"),
        ("c", "charlie"),
        ("d", "delta"),
    ])
    .await;
    let retriever = retriever(&store, 4);

    let full = retriever.retrieve("bravo").await.unwrap();
    let mut truncated = retriever.retrieve("bravo").await.unwrap();
    truncated.truncate(2);

    assert_eq!(truncated, full[..2].to_vec());
}

#[tokio::test]
async fn empty_index_yields_empty_results() {
    let store = Arc::new(MemoryIndexStore::new());
    store
        .create_index("documents", DIMENSION, SimilarityMetric::Cosine)
        .await
        .unwrap();

    let results = retriever(&store, 3).retrieve("anything").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn missing_metadata_maps_to_none() {
    let store = Arc::new(MemoryIndexStore::new());
    store
        .create_index("documents", DIMENSION, SimilarityMetric::Cosine)
        .await
        .unwrap();

    let embedder = StubProvider::new(DIMENSION);
    let index = store.index("documents").await.unwrap();
    index
        .upsert(vec![VectorRecord {
            id: "bare".to_string(),
            vector: embedder.embed("bare record").await.unwrap(),
            metadata: HashMap::new(),
            filter: HashMap::new(),
        }])
        .await
        .unwrap();

    let results = retriever(&store, 1).retrieve("bare record").await.unwrap();

    assert_eq!(results[0].id, "bare");
    assert!(results[0].text.is_none());
    assert!(results[0].source.is_none());
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let store = seeded_store(&[("a", "alpha")]).await;

    let err = retriever(&store, 3).retrieve("   ").await.err().unwrap();
    assert!(matches!(err, RetrieverError::EmptyQuestion));
}

#[tokio::test]
async fn missing_index_propagates() {
    let store = Arc::new(MemoryIndexStore::new());

    let result = retriever(&store, 3).retrieve("anything").await;
    assert!(result.is_err());
}
