// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classifier;
pub mod config;
pub mod database;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod retrieval;
pub mod synthesis;
pub mod utils;

pub use classifier::{DocumentTypeClassifier, DomainClassifier};
pub use config::{
    ClassificationConfig, Config, CorpusBackend, CorpusConfig, DomainRule, EmbeddingConfig,
    RetrievalConfig, SynthesisConfig,
};
pub use database::{CorpusFiles, EmbeddingProvider, HttpEmbeddingClient, LanceDbClient};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use models::{Answer, Corpus, CorpusEntry, DocumentType, EvidenceItem, QueryDomain};
pub use parser::{NoiseFilter, SentenceSegmenter};
pub use pipeline::{PipelineStats, ProgressTracker, QueryEngine, QueryOutcome, SummaryPipeline};
pub use retrieval::{EvidenceRanker, RankingPolicy};
pub use synthesis::{AnswerSynthesizer, FrequencySummarizer};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _ranker = EvidenceRanker::default();
        let _synthesizer = AnswerSynthesizer::default();
    }
}
