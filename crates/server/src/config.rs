use anyhow::{anyhow, Result};
use ragdex_ingest::IngestConfig;
use ragdex_retriever::RetrieverConfig;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Runtime configuration for the ragdex service.
///
/// Defaults mirror the reference deployment; every field can be overridden
/// through a `RAGDEX_*` environment variable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory uploaded and ingested documents live in (`RAGDEX_SOURCE_DIR`)
    pub source_dir: PathBuf,

    /// Vector index name (`RAGDEX_INDEX_NAME`)
    pub index_name: String,

    /// Chunk window size in characters (`RAGDEX_CHUNK_SIZE`)
    pub chunk_size: usize,

    /// Overlap between consecutive chunks (`RAGDEX_CHUNK_OVERLAP`)
    pub chunk_overlap: usize,

    /// Nearest-neighbor candidates per query (`RAGDEX_TOP_K`)
    pub top_k: usize,

    /// Base URL of the vector database service (`RAGDEX_INDEX_URL`)
    pub index_url: String,

    /// Embedding model name (`RAGDEX_EMBEDDING_MODEL`)
    pub embedding_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("data"),
            index_name: "documents".to_string(),
            chunk_size: 300,
            chunk_overlap: 50,
            top_k: 3,
            index_url: "http://localhost:8080".to_string(),
            embedding_model: "all-MiniLM-L6-v2".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            source_dir: env::var("RAGDEX_SOURCE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.source_dir),
            index_name: env::var("RAGDEX_INDEX_NAME").unwrap_or(defaults.index_name),
            chunk_size: env_parse("RAGDEX_CHUNK_SIZE", defaults.chunk_size)?,
            chunk_overlap: env_parse("RAGDEX_CHUNK_OVERLAP", defaults.chunk_overlap)?,
            top_k: env_parse("RAGDEX_TOP_K", defaults.top_k)?,
            index_url: env::var("RAGDEX_INDEX_URL").unwrap_or(defaults.index_url),
            embedding_model: env::var("RAGDEX_EMBEDDING_MODEL")
                .unwrap_or(defaults.embedding_model),
        })
    }

    /// Ingestion-pipeline view of this configuration
    pub fn ingest_config(&self) -> IngestConfig {
        IngestConfig {
            source_dir: self.source_dir.clone(),
            index_name: self.index_name.clone(),
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
        }
    }

    /// Retriever view of this configuration
    pub fn retriever_config(&self) -> RetrieverConfig {
        RetrieverConfig {
            index_name: self.index_name.clone(),
            top_k: self.top_k,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow!("Invalid value for {key}: {e}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = AppConfig::default();

        assert_eq!(config.source_dir, PathBuf::from("data"));
        assert_eq!(config.index_name, "documents");
        assert_eq!(config.chunk_size, 300);
        assert_eq!(config.chunk_overlap, 50);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_pipeline_views_carry_the_recognized_options() {
        let config = AppConfig {
            source_dir: PathBuf::from("/srv/docs"),
            index_name: "kb".to_string(),
            chunk_size: 200,
            chunk_overlap: 20,
            top_k: 5,
            ..AppConfig::default()
        };

        let ingest = config.ingest_config();
        assert_eq!(ingest.source_dir, PathBuf::from("/srv/docs"));
        assert_eq!(ingest.index_name, "kb");
        assert_eq!(ingest.chunk_size, 200);
        assert_eq!(ingest.chunk_overlap, 20);

        let retriever = config.retriever_config();
        assert_eq!(retriever.index_name, "kb");
        assert_eq!(retriever.top_k, 5);
    }
}
