use crate::error::{EmbeddingError, Result};
use crate::provider::EmbeddingProvider;
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::{Arc, Mutex};
use tokio::task::spawn_blocking;

/// ONNX embedding backend powered by `fastembed`.
///
/// The model is loaded once and the output dimension is probed at
/// construction; it never changes afterwards. Inference is blocking, so all
/// calls run on the tokio blocking pool.
pub struct FastEmbedProvider {
    model: Arc<Mutex<TextEmbedding>>,
    model_name: String,
    dimension: usize,
}

impl FastEmbedProvider {
    /// Load an embedding model by name (e.g. `all-MiniLM-L6-v2`).
    ///
    /// Downloads model assets on first use.
    pub async fn new(model_name: &str) -> Result<Self> {
        let resolved = resolve_model(model_name)?;
        let name = model_name.to_string();

        let (model, dimension) = spawn_blocking(move || -> Result<(TextEmbedding, usize)> {
            let mut model = TextEmbedding::try_new(
                InitOptions::new(resolved).with_show_download_progress(false),
            )
            .map_err(|e| EmbeddingError::Model(e.to_string()))?;

            // Probe the output dimension once; the provider contract fixes
            // it for the lifetime of the instance.
            let probe = model
                .embed(vec!["dimension probe"], None)
                .map_err(|e| EmbeddingError::Model(e.to_string()))?;
            let dimension = probe.first().map(Vec::len).ok_or(EmbeddingError::Empty)?;

            Ok((model, dimension))
        })
        .await
        .map_err(|e| EmbeddingError::Task(e.to_string()))??;

        log::info!("Loaded embedding model '{name}' (dimension {dimension})");

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            model_name: name,
            dimension,
        })
    }

    /// Load the default model used by the reference deployment
    pub async fn default_model() -> Result<Self> {
        Self::new(DEFAULT_MODEL).await
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

pub(crate) const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

fn resolve_model(raw: &str) -> Result<EmbeddingModel> {
    // Accept both bare and sentence-transformers style names.
    let name = raw
        .trim()
        .to_ascii_lowercase()
        .trim_start_matches("sentence-transformers/")
        .to_string();
    match name.as_str() {
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        "bge-large-en-v1.5" => Ok(EmbeddingModel::BGELargeENV15),
        other => Err(EmbeddingError::UnsupportedModel(other.to_string())),
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text.to_string()];
        let mut vectors = self.embed_batch(&texts).await?;
        vectors.pop().ok_or(EmbeddingError::Empty)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let expected = texts.len();
        let owned = texts.to_vec();
        let model = Arc::clone(&self.model);

        let vectors = spawn_blocking(move || {
            let mut model = model
                .lock()
                .map_err(|_| EmbeddingError::Model("embedding model lock poisoned".to_string()))?;
            model
                .embed(owned, None)
                .map_err(|e| EmbeddingError::Model(e.to_string()))
        })
        .await
        .map_err(|e| EmbeddingError::Task(e.to_string()))??;

        if vectors.len() != expected {
            return Err(EmbeddingError::Model(format!(
                "model returned {} embeddings for {expected} inputs",
                vectors.len()
            )));
        }

        Ok(vectors)
    }
}
