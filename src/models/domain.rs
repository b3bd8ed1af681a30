// file: src/models/domain.rs
// description: coarse topical domains and document type labels
// reference: keyword-table classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical domain of a query or a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDomain {
    Legal,
    Medical,
    Data,
    General,
}

impl QueryDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryDomain::Legal => "legal",
            QueryDomain::Medical => "medical",
            QueryDomain::Data => "data",
            QueryDomain::General => "general",
        }
    }

    /// General queries impose no domain filtering on candidates.
    pub fn is_topical(&self) -> bool {
        *self != QueryDomain::General
    }
}

impl fmt::Display for QueryDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label assigned to the primary evidence text before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Legal Document")]
    Legal,
    #[serde(rename = "Research Document")]
    Research,
    #[serde(rename = "General Document")]
    General,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Legal => "Legal Document",
            DocumentType::Research => "Research Document",
            DocumentType::General => "General Document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
