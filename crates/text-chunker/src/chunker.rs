use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::types::TextChunk;
use std::path::Path;

/// Fixed-size overlapping chunker for plain text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker, rejecting configurations whose cursor would
    /// never advance (`chunk_overlap >= chunk_size`).
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Split text into overlapping windows of `chunk_size` characters.
    ///
    /// A cursor starts at 0 and advances by `chunk_size - chunk_overlap`
    /// until it reaches the end of the text. Each window is clamped to the
    /// text end and trimmed; whitespace-only windows are dropped. Windows
    /// never split a UTF-8 scalar value.
    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every character boundary, with the text end as the
        // final sentinel, so windows are measured in characters.
        let mut bounds: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        bounds.push(text.len());
        let char_len = bounds.len() - 1;

        let stride = self.config.stride();
        let mut chunks = Vec::new();
        let mut cursor = 0;
        let mut sequence = 0;

        while cursor < char_len {
            let end = (cursor + self.config.chunk_size).min(char_len);
            let window = text[bounds[cursor]..bounds[end]].trim();

            if !window.is_empty() {
                chunks.push(TextChunk::new(window, sequence));
                sequence += 1;
            }

            cursor += stride;
        }

        log::debug!(
            "Chunked {char_len} chars into {} chunks (size {}, overlap {})",
            chunks.len(),
            self.config.chunk_size,
            self.config.chunk_overlap
        );
        chunks
    }

    /// Chunk the contents of a UTF-8 text file
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<TextChunk>> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.chunk(&content))
    }

    /// The configuration this chunker was built with
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}
