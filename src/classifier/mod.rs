// file: src/classifier/mod.rs
// description: keyword-table classifiers for queries, sources and document text
// reference: internal module structure

pub mod document;
pub mod domain;

pub use document::DocumentTypeClassifier;
pub use domain::DomainClassifier;
