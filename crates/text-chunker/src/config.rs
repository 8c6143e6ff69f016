use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for fixed-size overlapping chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Window size in characters
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks. Must stay below
    /// `chunk_size` or the cursor would never advance.
    pub chunk_overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 300,
            chunk_overlap: 50,
        }
    }
}

impl ChunkerConfig {
    #[must_use]
    pub const fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Number of characters the cursor advances between windows
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::invalid_config("chunk_size must be > 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ChunkerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 300);
        assert_eq!(config.chunk_overlap, 50);
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = ChunkerConfig::new(0, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlap_equal_to_size_rejected() {
        let config = ChunkerConfig::new(100, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlap_above_size_rejected() {
        let config = ChunkerConfig::new(100, 150);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_overlap_valid() {
        let config = ChunkerConfig::new(100, 0);
        assert!(config.validate().is_ok());
        assert_eq!(config.stride(), 100);
    }

    #[test]
    fn test_stride() {
        assert_eq!(ChunkerConfig::new(300, 50).stride(), 250);
        assert_eq!(ChunkerConfig::new(10, 3).stride(), 7);
    }
}
