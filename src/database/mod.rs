// file: src/database/mod.rs
// description: corpus loading and embedding provider module exports
// reference: internal module structure

pub mod client;
pub mod embeddings;
pub mod files;

pub use client::LanceDbClient;
pub use embeddings::{EmbeddingProvider, HttpEmbeddingClient};
pub use files::CorpusFiles;

use crate::config::{CorpusBackend, CorpusConfig};
use crate::error::Result;
use crate::models::Corpus;

/// Load the corpus from whichever backend the configuration selects.
pub async fn load_corpus(config: &CorpusConfig) -> Result<Corpus> {
    match config.backend {
        CorpusBackend::Files => {
            CorpusFiles::new(config.vectors_path.clone(), config.metadata_path.clone()).load()
        }
        CorpusBackend::Lancedb => LanceDbClient::new(config.clone()).await?.load_corpus().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_corpus_files_backend() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default_config().corpus;
        config.vectors_path = temp.path().join("vectors.json");
        config.metadata_path = temp.path().join("metadata.json");

        fs::write(&config.vectors_path, "[[0.5, 0.5]]").unwrap();
        fs::write(
            &config.metadata_path,
            r#"[{"source_file": "employee_data.csv", "text": "Salary bands by grade."}]"#,
        )
        .unwrap();

        let corpus = tokio_test::block_on(load_corpus(&config)).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.entries()[0].source_file, "employee_data.csv");
    }
}
