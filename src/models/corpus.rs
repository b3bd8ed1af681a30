// file: src/models/corpus.rs
// description: read-only corpus of embedded document sections
// reference: positional vector/metadata pairing produced by the indexing pipeline

use crate::error::{PipelineError, Result};
use crate::retrieval::similarity::l2_norm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metadata record stored alongside each vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMetadata {
    pub source_file: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub vector: Vec<f32>,
    pub source_file: String,
    pub text: String,
    pub title: Option<String>,
}

impl CorpusEntry {
    pub fn new(vector: Vec<f32>, metadata: SectionMetadata) -> Self {
        Self {
            vector,
            source_file: metadata.source_file,
            text: metadata.text,
            title: metadata.title,
        }
    }
}

/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    norms: Vec<f32>,
}

impl Corpus {
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        let norms = entries.iter().map(|e| l2_norm(&e.vector)).collect();
        Self { entries, norms }
    }

    /// Pair vectors and metadata by position.
    pub fn from_parts(vectors: Vec<Vec<f32>>, metadata: Vec<SectionMetadata>) -> Result<Self> {
        if vectors.len() != metadata.len() {
            return Err(PipelineError::Corpus(format!(
                "{} vectors but {} metadata records",
                vectors.len(),
                metadata.len()
            )));
        }

        let entries = vectors
            .into_iter()
            .zip(metadata)
            .map(|(vector, meta)| CorpusEntry::new(vector, meta))
            .collect();

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    /// L2 norm of the vector at `index`, computed at load time.
    pub fn norm(&self, index: usize) -> f32 {
        self.norms.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension of the first vector, if any.
    pub fn dimension(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.len())
    }

    pub fn sources(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.source_file.as_str()).collect()
    }
}
