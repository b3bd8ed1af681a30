// file: src/database/files.rs
// description: JSON vector store reader (vectors.json + metadata.json)
// reference: positional vector/metadata files written by the indexing pipeline

use crate::error::{PipelineError, Result};
use crate::models::{Corpus, SectionMetadata};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CorpusFiles {
    vectors_path: PathBuf,
    metadata_path: PathBuf,
}

impl CorpusFiles {
    pub fn new(vectors_path: PathBuf, metadata_path: PathBuf) -> Self {
        Self {
            vectors_path,
            metadata_path,
        }
    }

    /// Read both files and pair their records by position.
    pub fn load(&self) -> Result<Corpus> {
        info!("Loading vector store from {}", self.vectors_path.display());

        let vectors: Vec<Vec<f32>> = read_json(&self.vectors_path)?;
        let metadata: Vec<SectionMetadata> = read_json(&self.metadata_path)?;

        let corpus = Corpus::from_parts(vectors, metadata)?;
        info!("Loaded {} sections", corpus.len());
        Ok(corpus)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        PipelineError::Corpus(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_pairs_files() {
        let temp = TempDir::new().unwrap();
        let vectors = write(&temp, "vectors.json", "[[1.0, 0.0], [0.0, 1.0]]");
        let metadata = write(
            &temp,
            "metadata.json",
            r#"[
                {"source_file": "nda.json", "text": "The receiving party shall comply."},
                {"source_file": "study.json", "text": "Results were significant.", "title": "Results"}
            ]"#,
        );

        let corpus = CorpusFiles::new(vectors, metadata).load().unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().title.as_deref(), Some("Results"));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let temp = TempDir::new().unwrap();
        let files = CorpusFiles::new(
            temp.path().join("vectors.json"),
            temp.path().join("metadata.json"),
        );
        assert!(matches!(
            files.load(),
            Err(PipelineError::FileOperation { .. })
        ));
    }

    #[test]
    fn test_misaligned_files_rejected() {
        let temp = TempDir::new().unwrap();
        let vectors = write(&temp, "vectors.json", "[[1.0]]");
        let metadata = write(&temp, "metadata.json", "[]");

        assert!(matches!(
            CorpusFiles::new(vectors, metadata).load(),
            Err(PipelineError::Corpus(_))
        ));
    }

    #[test]
    fn test_empty_store_loads_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let vectors = write(&temp, "vectors.json", "[]");
        let metadata = write(&temp, "metadata.json", "[]");

        assert!(CorpusFiles::new(vectors, metadata).load().unwrap().is_empty());
    }
}
