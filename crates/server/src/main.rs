//! `ragdex`: semantic document search over an external vector index.
//!
//! Subcommands: `serve` (HTTP API), `ingest` (one-shot pipeline run) and
//! `query` (ask a question from the command line).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ragdex_embeddings::{EmbeddingMode, EmbeddingProvider, FastEmbedProvider, StubProvider};
use ragdex_ingest::IngestPipeline;
use ragdex_retriever::Retriever;
use ragdex_vector_index::{HttpIndexStore, VectorIndexStore};
use std::sync::Arc;

mod app;
mod config;

use app::AppState;
use config::AppConfig;

/// Dimension used when the stub embedding backend is selected; matches the
/// default production model so existing indexes stay queryable.
const STUB_DIMENSION: usize = 384;

#[derive(Parser)]
#[command(name = "ragdex")]
#[command(about = "Semantic document search over an external vector index", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve(ServeArgs),

    /// Run one ingestion pass over the source directory
    Ingest,

    /// Ask a question against the index
    Query(QueryArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,
}

#[derive(Args)]
struct QueryArgs {
    /// The question to answer
    question: String,

    /// Return at most this many results (defaults to the configured top-k)
    #[arg(long)]
    top_k: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve(args) => serve(config, args).await,
        Commands::Ingest => run_ingest(config).await,
        Commands::Query(args) => run_query(config, args).await,
    }
}

/// Build the two collaborators both pipelines share.
async fn collaborators(
    config: &AppConfig,
) -> Result<(Arc<dyn EmbeddingProvider>, Arc<dyn VectorIndexStore>)> {
    let embedder: Arc<dyn EmbeddingProvider> = match EmbeddingMode::from_env()? {
        EmbeddingMode::Fast => Arc::new(
            FastEmbedProvider::new(&config.embedding_model)
                .await
                .context("Failed to load embedding model")?,
        ),
        EmbeddingMode::Stub => {
            log::warn!("Running with the stub embedding backend");
            Arc::new(StubProvider::new(STUB_DIMENSION))
        }
    };

    let store = HttpIndexStore::new(&config.index_url, HttpIndexStore::DEFAULT_TIMEOUT)
        .context("Failed to build vector index client")?;

    Ok((embedder, Arc::new(store)))
}

async fn serve(config: AppConfig, args: ServeArgs) -> Result<()> {
    let (embedder, store) = collaborators(&config).await?;
    let state = Arc::new(AppState::new(config, embedder, store));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    println!("Serving ragdex API on http://{}", args.bind);
    axum::serve(listener, app::router(state)).await?;
    Ok(())
}

async fn run_ingest(config: AppConfig) -> Result<()> {
    let (embedder, store) = collaborators(&config).await?;
    let pipeline = IngestPipeline::new(config.ingest_config(), embedder, store)?;

    let report = pipeline.ingest().await?;
    if report.is_empty() {
        println!("No documents found to ingest.");
    } else {
        println!(
            "Ingested {} chunks from {} files in {} ms.",
            report.chunks, report.files, report.elapsed_ms
        );
    }
    Ok(())
}

async fn run_query(config: AppConfig, args: QueryArgs) -> Result<()> {
    let (embedder, store) = collaborators(&config).await?;
    let retriever = Retriever::new(config.retriever_config(), embedder, store);

    let mut results = retriever.retrieve(&args.question).await?;
    if let Some(top_k) = args.top_k {
        results.truncate(top_k);
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for chunk in results {
        println!("----");
        match chunk.score {
            Some(score) => println!("Score: {score:.4}"),
            None => println!("Score: n/a"),
        }
        println!("Source: {}", chunk.source.as_deref().unwrap_or("unknown"));
        println!("Text: {}", chunk.text.as_deref().unwrap_or(""));
    }
    Ok(())
}
