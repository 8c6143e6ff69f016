use crate::error::{Result, VectorIndexError};
use crate::store::{VectorIndex, VectorIndexStore};
use crate::types::{CreateIndexOutcome, QueryMatch, SimilarityMetric, VectorRecord};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// REST client for the external vector database.
///
/// The service exposes its API under `<base>/api/v1`:
///
/// - `POST /index` creates an index (HTTP 409 when it already exists)
/// - `GET  /index/list` lists index names
/// - `POST /index/{name}/vectors` upserts records
/// - `POST /index/{name}/search` runs a similarity query
///
/// The client applies a request timeout and performs no retries; retry
/// policy belongs to the deployment, not the pipelines.
#[derive(Clone)]
pub struct HttpIndexStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIndexStore {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Build a client for the service at `base_url` (e.g.
    /// `http://localhost:8080`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: format!("{}/api/v1", base_url.trim_end_matches('/')),
        })
    }

}

#[async_trait]
impl VectorIndexStore for HttpIndexStore {
    async fn create_index(
        &self,
        name: &str,
        dimension: usize,
        metric: SimilarityMetric,
    ) -> Result<CreateIndexOutcome> {
        let request = CreateIndexRequest {
            name,
            dimension,
            space_type: metric,
        };
        let response = self
            .client
            .post(format!("{}/index", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Ok(CreateIndexOutcome::AlreadyExists);
        }
        if status.is_success() {
            return Ok(CreateIndexOutcome::Created);
        }
        Err(api_error(status, response).await)
    }

    async fn index(&self, name: &str) -> Result<Box<dyn VectorIndex>> {
        // Handles are cheap; existence is checked by the service on the
        // first upsert or query.
        Ok(Box::new(HttpIndex {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            name: name.to_string(),
        }))
    }

    async fn list_indexes(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/index/list", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let payload: ListIndexesResponse = response.json().await?;
        Ok(payload.indexes)
    }
}

struct HttpIndex {
    client: reqwest::Client,
    base_url: String,
    name: String,
}

impl HttpIndex {
    fn url(&self, suffix: &str) -> String {
        format!("{}/index/{}/{suffix}", self.base_url, self.name)
    }
}

#[async_trait]
impl VectorIndex for HttpIndex {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<()> {
        let response = self
            .client
            .post(self.url("vectors"))
            .json(&UpsertRequest { vectors: records })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VectorIndexError::NotFound(self.name.clone()));
        }
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_vectors: bool,
    ) -> Result<Vec<QueryMatch>> {
        let request = SearchRequest {
            vector,
            top_k,
            include_vectors,
        };
        let response = self
            .client
            .post(self.url("search"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VectorIndexError::NotFound(self.name.clone()));
        }
        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let payload: SearchResponse = response.json().await?;
        Ok(payload.results)
    }
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> VectorIndexError {
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "<body unavailable>".to_string());
    VectorIndexError::Api {
        status: status.as_u16(),
        message,
    }
}

#[derive(Serialize)]
struct CreateIndexRequest<'a> {
    name: &'a str,
    dimension: usize,
    space_type: SimilarityMetric,
}

#[derive(Deserialize)]
struct ListIndexesResponse {
    #[serde(default)]
    indexes: Vec<String>,
}

#[derive(Serialize)]
struct UpsertRequest {
    vectors: Vec<VectorRecord>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_vectors: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<QueryMatch>,
}
