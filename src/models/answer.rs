// file: src/models/answer.rs
// description: tagged synthesis outcome with sentinel rendering
// reference: internal data structures

use crate::models::DocumentType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_EVIDENCE_SENTINEL: &str = "No relevant content found.";
pub const INCONCLUSIVE_SENTINEL: &str =
    "Relevant content found but could not generate a precise answer.";

/// Result of answer synthesis.
///
/// `NoEvidence` and `Inconclusive` are normal outcomes: the first means
/// retrieval returned nothing, the second that evidence exists but no
/// sentence matched the question's focus terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Answer {
    NoEvidence,
    Inconclusive,
    Summary {
        document_type: DocumentType,
        points: Vec<String>,
    },
}

impl Answer {
    pub fn is_summary(&self) -> bool {
        matches!(self, Answer::Summary { .. })
    }

    pub fn points(&self) -> &[String] {
        match self {
            Answer::Summary { points, .. } => points,
            _ => &[],
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::NoEvidence => f.write_str(NO_EVIDENCE_SENTINEL),
            Answer::Inconclusive => f.write_str(INCONCLUSIVE_SENTINEL),
            Answer::Summary {
                document_type,
                points,
            } => {
                write!(
                    f,
                    "DOCUMENT ANALYSIS RESULT\n\
                     -------------------------\n\
                     Document Type: {}\n\n\
                     Answer Summary:",
                    document_type
                )?;
                for (i, point) in points.iter().enumerate() {
                    write!(f, "\n{}. {}.", i + 1, point)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sentinels_are_distinct() {
        assert_eq!(Answer::NoEvidence.to_string(), "No relevant content found.");
        assert_eq!(
            Answer::Inconclusive.to_string(),
            "Relevant content found but could not generate a precise answer."
        );
        assert_ne!(Answer::NoEvidence.to_string(), Answer::Inconclusive.to_string());
    }

    #[test]
    fn test_summary_format() {
        let answer = Answer::Summary {
            document_type: DocumentType::Legal,
            points: vec![
                "The receiving party shall hold information in confidence".to_string(),
                "Obligations survive termination".to_string(),
            ],
        };

        let expected = "DOCUMENT ANALYSIS RESULT\n\
                        -------------------------\n\
                        Document Type: Legal Document\n\n\
                        Answer Summary:\n\
                        1. The receiving party shall hold information in confidence.\n\
                        2. Obligations survive termination.";
        assert_eq!(answer.to_string(), expected);
        assert_eq!(answer.points().len(), 2);
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_string(&Answer::Inconclusive).unwrap();
        assert_eq!(json, r#"{"status":"inconclusive"}"#);
    }
}
