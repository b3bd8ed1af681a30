// file: src/models/evidence.rs
// description: ranked evidence item returned by retrieval
// reference: Used for vector similarity search results

use serde::{Deserialize, Serialize};

/// Title used when the corpus metadata carries none.
pub const DEFAULT_TITLE: &str = "Section";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Cosine similarity rounded to three decimals
    pub score: f32,

    /// Source file the section was extracted from
    pub source: String,

    pub title: String,

    /// Full section text
    pub text: String,
}

impl EvidenceItem {
    pub fn new(score: f32, source: String, title: Option<String>, text: String) -> Self {
        Self {
            score: round_score(score),
            source,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            text,
        }
    }

    /// First `max_chars` characters of the text followed by an ellipsis.
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.text.chars().take(max_chars).collect();
        format!("{}...", head)
    }

    /// Format as a numbered block for terminal display
    pub fn format_summary(&self, rank: usize, max_chars: usize) -> String {
        format!(
            "[{}] Source: {} | Score: {}\n{}\n",
            rank,
            self.source,
            self.score,
            self.preview(max_chars)
        )
    }
}

/// Rounds to the three-decimal grid reported on every evidence item.
pub fn round_score(score: f32) -> f32 {
    ((score as f64 * 1000.0).round() / 1000.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_creation_defaults_title() {
        let item = EvidenceItem::new(
            0.87654,
            "agreement.pdf.json".to_string(),
            None,
            "The receiving party shall protect the information.".to_string(),
        );

        assert_eq!(item.score, 0.877);
        assert_eq!(item.title, "Section");
        assert_eq!(item.source, "agreement.pdf.json");
    }

    #[test]
    fn test_evidence_keeps_title() {
        let item = EvidenceItem::new(0.5, "a".to_string(), Some("Scope".to_string()), String::new());
        assert_eq!(item.title, "Scope");
    }

    #[test]
    fn test_format_summary() {
        let item = EvidenceItem::new(
            0.4321,
            "diabetes_research.json".to_string(),
            None,
            "Patients with elevated glucose were followed for two years".to_string(),
        );

        let summary = item.format_summary(2, 8);
        assert!(summary.starts_with("[2] Source: diabetes_research.json | Score: 0.432"));
        assert!(summary.contains("Patients..."));
    }

    #[test]
    fn test_preview_is_char_safe() {
        let item = EvidenceItem::new(0.3, "s".to_string(), None, "héllo wörld".to_string());
        assert_eq!(item.preview(2), "hé...");
    }
}
