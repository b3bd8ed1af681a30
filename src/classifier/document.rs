// file: src/classifier/document.rs
// description: document type detection from marker vocabularies

use crate::models::DocumentType;

const LEGAL_MARKERS: &[&str] = &[
    "non disclosure agreement",
    "confidential information",
    "receiving party",
    "disclosing party",
    "shall",
    "hereinafter",
];

const RESEARCH_MARKERS: &[&str] = &[
    "abstract",
    "methodology",
    "dataset",
    "results",
    "discussion",
    "this study aims",
    "research",
];

/// Markers that must be present before a label other than General applies.
const MARKER_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct DocumentTypeClassifier;

impl DocumentTypeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> DocumentType {
        let lowered = text.to_lowercase();

        if count_markers(&lowered, LEGAL_MARKERS) >= MARKER_THRESHOLD {
            return DocumentType::Legal;
        }
        if count_markers(&lowered, RESEARCH_MARKERS) >= MARKER_THRESHOLD {
            return DocumentType::Research;
        }

        DocumentType::General
    }
}

/// Number of distinct markers present in `lowered`.
fn count_markers(lowered: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| lowered.contains(*m)).count()
}
