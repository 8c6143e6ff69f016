use crate::error::Result;
use std::path::{Path, PathBuf};

/// A document file selected for ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// File name, used to derive record identifiers
    pub name: String,

    /// Full path for reading
    pub path: PathBuf,
}

/// Scanner for plain-text documents in a flat source directory.
///
/// Only regular files whose name ends in `.txt` (case-insensitive) are
/// recognized; subdirectories are not descended into.
pub struct DocumentScanner {
    dir: PathBuf,
}

const TEXT_EXTENSION: &str = "txt";

impl DocumentScanner {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// List matching files, sorted by name for a deterministic run order
    pub async fn scan(&self) -> Result<Vec<DocumentFile>> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let path = entry.path();
            if !is_text_file(&path) {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("Skipping file with non-UTF-8 name: {}", path.display());
                continue;
            };

            files.push(DocumentFile {
                name: name.to_string(),
                path: path.clone(),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        log::info!("Found {} text files in {}", files.len(), self.dir.display());
        Ok(files)
    }
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("b.txt"), "b").await.unwrap();
        tokio::fs::write(dir.path().join("a.txt"), "a").await.unwrap();
        tokio::fs::write(dir.path().join("notes.md"), "md").await.unwrap();
        tokio::fs::write(dir.path().join("UPPER.TXT"), "u").await.unwrap();
        tokio::fs::create_dir(dir.path().join("nested.txt")).await.unwrap();

        let files = DocumentScanner::new(dir.path()).scan().await.unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["UPPER.TXT", "a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_scan_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = DocumentScanner::new(dir.path()).scan().await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_dir_is_io_error() {
        let result = DocumentScanner::new("/nonexistent/ragdex-data").scan().await;
        assert!(result.is_err());
    }
}
