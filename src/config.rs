// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::models::QueryDomain;
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub synthesis: SynthesisConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusBackend {
    Files,
    Lancedb,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub backend: CorpusBackend,
    pub vectors_path: PathBuf,
    pub metadata_path: PathBuf,
    pub lancedb_uri: String,
    pub table_name: String,
    pub vector_column: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub min_score: f32,
    pub max_per_source: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthesisConfig {
    pub max_points: usize,
    pub min_sentence_chars: usize,
}

/// Optional overrides for the built-in domain keyword tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub query_rules: Vec<DomainRule>,
    #[serde(default)]
    pub source_rules: Vec<DomainRule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DomainRule {
    pub domain: QueryDomain,
    pub keywords: Vec<String>,
}

impl DomainRule {
    pub fn new(domain: QueryDomain, keywords: &[&str]) -> Self {
        Self {
            domain,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_score: 0.20,
            max_per_source: 3,
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_points: 4,
            min_sentence_chars: 40,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCINTEL")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                backend: CorpusBackend::Files,
                vectors_path: PathBuf::from("vector_store/vectors.json"),
                metadata_path: PathBuf::from("vector_store/metadata.json"),
                lancedb_uri: "data/lancedb".to_string(),
                table_name: "sections".to_string(),
                vector_column: "vector".to_string(),
            },
            embedding: EmbeddingConfig {
                endpoint: "http://127.0.0.1:8080/v1/embeddings".to_string(),
                model: "all-MiniLM-L6-v2".to_string(),
                api_key: None,
            },
            retrieval: RetrievalConfig::default(),
            synthesis: SynthesisConfig::default(),
            classification: ClassificationConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.retrieval.top_k == 0 {
            return Err(PipelineError::Config(
                "top_k must be greater than 0".to_string(),
            ));
        }

        if !(-1.0..=1.0).contains(&self.retrieval.min_score) {
            return Err(PipelineError::Config(format!(
                "min_score must be within [-1, 1], got {}",
                self.retrieval.min_score
            )));
        }

        if self.retrieval.max_per_source == 0 {
            return Err(PipelineError::Config(
                "max_per_source must be greater than 0".to_string(),
            ));
        }

        Validator::validate_url(&self.embedding.endpoint)?;

        if self.synthesis.max_points == 0 {
            return Err(PipelineError::Config(
                "max_points must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
