use crate::config::AppConfig;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ragdex_embeddings::EmbeddingProvider;
use ragdex_ingest::{IngestError, IngestPipeline};
use ragdex_retriever::{RetrievedChunk, Retriever, RetrieverError};
use ragdex_vector_index::VectorIndexStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Shared state behind every handler: configuration plus the two
/// collaborators both pipelines run against.
pub struct AppState {
    config: AppConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorIndexStore>,
    retriever: Retriever,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorIndexStore>,
    ) -> Self {
        let retriever = Retriever::new(
            config.retriever_config(),
            Arc::clone(&embedder),
            Arc::clone(&store),
        );
        Self {
            config,
            embedder,
            store,
            retriever,
        }
    }
}

/// HTTP surface of the service
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/query", post(query_documents))
        .route("/ingest", post(ingest_file))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "ragdex API is running",
    })
}

#[derive(Deserialize)]
struct QueryRequest {
    question: String,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

const fn default_top_k() -> usize {
    3
}

#[derive(Serialize)]
struct QueryResponse {
    results: Vec<RetrievedChunk>,
}

async fn query_documents(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let mut results = state.retriever.retrieve(&request.question).await?;
    // Pure prefix of the already-ranked list; no re-ranking.
    results.truncate(request.top_k);
    Ok(Json(QueryResponse { results }))
}

#[derive(Serialize)]
struct IngestResponse {
    status: &'static str,
    message: String,
    chunks: usize,
}

async fn ingest_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, ApiError> {
    let mut saved: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .and_then(sanitize_file_name)
            .ok_or_else(|| ApiError::BadRequest("Upload is missing a file name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        tokio::fs::create_dir_all(&state.config.source_dir)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        tokio::fs::write(state.config.source_dir.join(&file_name), &data)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        saved = Some(file_name);
        break;
    }

    let Some(file_name) = saved else {
        return Err(ApiError::BadRequest(
            "Multipart body has no 'file' field".to_string(),
        ));
    };

    let pipeline = IngestPipeline::new(
        state.config.ingest_config(),
        Arc::clone(&state.embedder),
        Arc::clone(&state.store),
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;
    let report = pipeline.ingest().await?;

    Ok(Json(IngestResponse {
        status: "success",
        message: format!("File '{file_name}' ingested successfully"),
        chunks: report.chunks,
    }))
}

/// Strip any path components from a client-supplied file name
fn sanitize_file_name(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            Self::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };
        log::warn!("Request failed ({status}): {detail}");
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<RetrieverError> for ApiError {
    fn from(err: RetrieverError) -> Self {
        match err {
            RetrieverError::EmptyQuestion => Self::BadRequest(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        Self::Internal(err.to_string())
    }
}
