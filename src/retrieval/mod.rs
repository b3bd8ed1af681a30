// file: src/retrieval/mod.rs
// description: evidence retrieval module exports
// reference: internal module structure

pub mod ranker;
pub mod similarity;

pub use ranker::{EvidenceRanker, RankingPolicy};
