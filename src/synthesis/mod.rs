// file: src/synthesis/mod.rs
// description: answer synthesis and extractive summarization exports
// reference: internal module structure

pub mod summarizer;
pub mod synthesizer;

pub use summarizer::{FrequencySummarizer, StructuredChunk};
pub use synthesizer::{AnswerSynthesizer, ScoredSentence};
