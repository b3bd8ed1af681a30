// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod corpus;
pub mod domain;
pub mod evidence;

pub use answer::{Answer, INCONCLUSIVE_SENTINEL, NO_EVIDENCE_SENTINEL};
pub use corpus::{Corpus, CorpusEntry, SectionMetadata};
pub use domain::{DocumentType, QueryDomain};
pub use evidence::{EvidenceItem, round_score};
