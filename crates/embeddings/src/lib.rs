//! # Ragdex Embeddings
//!
//! Text embedding providers behind a single capability trait.
//!
//! The pipelines never talk to a model directly: they hold an
//! [`EmbeddingProvider`] whose dimension is fixed at construction and whose
//! vectors are unit-normalized. Two backends exist:
//!
//! - [`FastEmbedProvider`]: ONNX inference via `fastembed` (the production
//!   backend; blocking inference runs on the tokio blocking pool)
//! - [`StubProvider`]: deterministic hash-seeded vectors for tests and
//!   offline runs
//!
//! The backend is chosen with [`EmbeddingMode::from_env`]
//! (`RAGDEX_EMBEDDING_MODE=fast|stub`).

mod error;
mod model;
mod provider;
mod stub;

pub use error::{EmbeddingError, Result};
pub use model::FastEmbedProvider;
pub use provider::{EmbeddingMode, EmbeddingProvider};
pub use stub::StubProvider;
