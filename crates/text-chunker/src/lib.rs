//! # Ragdex Text Chunker
//!
//! Fixed-size overlapping chunking for plain-text documents.
//!
//! ## Algorithm
//!
//! ```text
//! Document text
//!     │
//!     ├──> Sliding window (chunk_size chars, stride = size - overlap)
//!     │      └─> Substring, clamped to the document end
//!     │
//!     ├──> Whitespace trim (empty windows are dropped)
//!     │
//!     └──> TextChunk[] in document order, numbered 0..n
//! ```
//!
//! Chunking is deterministic and side-effect free: the same input always
//! produces the same chunk sequence.
//!
//! ## Example
//!
//! ```rust
//! use ragdex_text_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::new(300, 50)).unwrap();
//! let chunks = chunker.chunk("Chunking splits documents into windows.");
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].sequence, 0);
//! ```

mod chunker;
mod config;
mod error;
mod types;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use types::TextChunk;
