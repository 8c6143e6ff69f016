use serde::{Deserialize, Serialize};

/// A trimmed, non-empty segment of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The chunk text, with leading/trailing whitespace removed
    pub content: String,

    /// Position of this chunk within its document (0-indexed)
    pub sequence: usize,
}

impl TextChunk {
    pub fn new(content: impl Into<String>, sequence: usize) -> Self {
        Self {
            content: content.into(),
            sequence,
        }
    }

    /// Length of the chunk text in characters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
