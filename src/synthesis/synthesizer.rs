// file: src/synthesis/synthesizer.rs
// description: intent-aware sentence selection over retrieved evidence
// reference: extractive answer assembly

use crate::classifier::DocumentTypeClassifier;
use crate::config::SynthesisConfig;
use crate::models::{Answer, EvidenceItem};
use crate::parser::{NoiseFilter, SentenceSegmenter};
use tracing::debug;

/// Question phrasings asking what a document is about.
const OVERVIEW_TRIGGERS: &[&str] = &["cover", "about", "what does"];

/// Focus terms used for overview questions instead of the question's own words.
const GENERIC_FOCUS_TERMS: &[&str] = &[
    "purpose",
    "aim",
    "objective",
    "confidential",
    "information",
    "predict",
];

/// A candidate sentence and the number of focus terms it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub score: usize,
    pub sentence: String,
}

#[derive(Debug, Clone)]
pub struct AnswerSynthesizer {
    document_classifier: DocumentTypeClassifier,
    segmenter: SentenceSegmenter,
    noise: NoiseFilter,
    max_points: usize,
}

impl AnswerSynthesizer {
    pub fn new(config: &SynthesisConfig) -> Self {
        Self {
            document_classifier: DocumentTypeClassifier::new(),
            segmenter: SentenceSegmenter::new(config.min_sentence_chars),
            noise: NoiseFilter::new(),
            max_points: config.max_points,
        }
    }

    /// Build an answer to `question` from ranked `evidence`.
    ///
    /// The document type comes from the highest-ranked item only; the
    /// sentence pool is every item's sentences in rank order, minus noise.
    pub fn synthesize(&self, question: &str, evidence: &[EvidenceItem]) -> Answer {
        let Some(primary) = evidence.first() else {
            return Answer::NoEvidence;
        };

        let document_type = self.document_classifier.classify(&primary.text);

        let pool: Vec<String> = evidence
            .iter()
            .flat_map(|item| self.segmenter.segment(&item.text))
            .collect();
        let pool_size = pool.len();
        let clean = self.noise.retain_clean(pool);

        let terms = focus_terms(question);
        let ranked = rank_sentences(&clean, &terms);

        debug!(
            "Synthesizing from {} sentences ({} clean, {} matching) as {}",
            pool_size,
            clean.len(),
            ranked.len(),
            document_type
        );

        if ranked.is_empty() {
            return Answer::Inconclusive;
        }

        Answer::Summary {
            document_type,
            points: select_points(&ranked, self.max_points),
        }
    }
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new(&SynthesisConfig::default())
    }
}

/// Terms a sentence is matched against for `question`.
pub fn focus_terms(question: &str) -> Vec<String> {
    let lowered = question.to_lowercase();

    if OVERVIEW_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        return GENERIC_FOCUS_TERMS.iter().map(|t| t.to_string()).collect();
    }

    lowered.split_whitespace().map(str::to_string).collect()
}

/// Count of focus terms occurring in `sentence` (case-insensitive substring).
pub fn score_sentence(sentence: &str, terms: &[String]) -> usize {
    let lowered = sentence.to_lowercase();
    terms.iter().filter(|t| lowered.contains(t.as_str())).count()
}

/// Sentences with at least one match, best first, ties in pool order.
pub fn rank_sentences(sentences: &[String], terms: &[String]) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .filter_map(|s| {
            let score = score_sentence(s, terms);
            (score > 0).then(|| ScoredSentence {
                score,
                sentence: s.clone(),
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

fn select_points(ranked: &[ScoredSentence], max_points: usize) -> Vec<String> {
    let mut points: Vec<String> = Vec::new();

    for candidate in ranked {
        if points.len() == max_points {
            break;
        }
        // Compare on the stripped form so "X." and "X" collapse to one point.
        let point = candidate.sentence.trim_end_matches([' ', ';', '.']);
        if points.iter().any(|p| p == point) {
            continue;
        }
        points.push(point.to_string());
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, NO_EVIDENCE_SENTINEL};
    use pretty_assertions::assert_eq;

    fn item(source: &str, text: &str) -> EvidenceItem {
        EvidenceItem::new(0.9, source.to_string(), None, text.to_string())
    }

    #[test]
    fn test_empty_evidence_is_no_evidence() {
        let synthesizer = AnswerSynthesizer::default();
        let answer = synthesizer.synthesize("anything", &[]);
        assert_eq!(answer, Answer::NoEvidence);
        assert_eq!(answer.to_string(), NO_EVIDENCE_SENTINEL);
    }

    #[test]
    fn test_overview_question_uses_generic_terms() {
        assert_eq!(
            focus_terms("What is this document ABOUT?"),
            vec!["purpose", "aim", "objective", "confidential", "information", "predict"]
        );
        assert_eq!(
            focus_terms("Which fields   are required"),
            vec!["which", "fields", "are", "required"]
        );
    }

    #[test]
    fn test_score_sentence_counts_terms() {
        let terms = focus_terms("What is this document about?");
        let purpose = "The purpose of this agreement is to protect confidential information";
        assert!(score_sentence(purpose, &terms) >= 2);
        assert_eq!(score_sentence("Payment is due monthly", &terms), 0);
    }

    #[test]
    fn test_prioritizes_matching_sentence() {
        let synthesizer = AnswerSynthesizer::default();
        let evidence = vec![item(
            "agreement.pdf",
            "Payment terms are listed in schedule B of the master contract. \
             The purpose of this agreement is to protect confidential information.",
        )];

        let answer = synthesizer.synthesize("What is this document about?", &evidence);
        assert_eq!(
            answer.points(),
            &["The purpose of this agreement is to protect confidential information".to_string()]
        );
    }

    #[test]
    fn test_noise_excluded_even_when_matching() {
        let synthesizer = AnswerSynthesizer::default();
        let evidence = vec![item(
            "thesis.pdf",
            "Thanks to my supervisor for guidance on the purpose and aim of this work.",
        )];

        let answer = synthesizer.synthesize("What does this cover?", &evidence);
        assert_eq!(answer, Answer::Inconclusive);
    }

    #[test]
    fn test_duplicates_collapsed_and_points_capped() {
        let synthesizer = AnswerSynthesizer::default();
        let repeated = "The receiving party shall keep all confidential information secret.";
        let text = format!(
            "{r} {r} Confidential information excludes publicly available material. \
             Confidential information must be returned upon request by the owner. \
             Confidential information may be shared with legal advisers only. \
             Confidential information obligations survive for five years after termination.",
            r = repeated
        );
        let evidence = vec![item("nda.pdf", &text), item("nda.pdf", repeated)];

        let answer = synthesizer.synthesize("confidential information", &evidence);
        let points = answer.points();
        assert_eq!(points.len(), 4);
        assert_eq!(
            points.iter().filter(|p| p.starts_with("The receiving party")).count(),
            1
        );
        assert!(matches!(
            answer,
            Answer::Summary {
                document_type: DocumentType::Legal,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        let ranked = vec![ScoredSentence {
            score: 1,
            sentence: "Clause four applies to all subcontractors and affiliates;".to_string(),
        }];
        assert_eq!(
            select_points(&ranked, 4),
            vec!["Clause four applies to all subcontractors and affiliates"]
        );
    }

    #[test]
    fn test_punctuation_variants_collapse_to_one_point() {
        let sentence = "Clause four applies to all subcontractors and affiliates";
        let ranked: Vec<ScoredSentence> = [".", "", ";", " ."]
            .iter()
            .map(|suffix| ScoredSentence {
                score: 1,
                sentence: format!("{}{}", sentence, suffix),
            })
            .collect();

        assert_eq!(select_points(&ranked, 4), vec![sentence]);
    }

    #[test]
    fn test_sentence_with_and_without_period_is_one_point() {
        let synthesizer = AnswerSynthesizer::default();
        let evidence = vec![
            item(
                "nda.pdf",
                "The receiving party shall keep all confidential information secret.",
            ),
            item(
                "nda.pdf",
                "The receiving party shall keep all confidential information secret",
            ),
        ];

        let answer = synthesizer.synthesize("confidential information", &evidence);
        assert_eq!(
            answer.points(),
            ["The receiving party shall keep all confidential information secret"]
        );
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let synthesizer = AnswerSynthesizer::default();
        let evidence = vec![item(
            "study.pdf",
            "This study aims to predict diabetes onset from routine measurements. \
             The dataset contains records for seven hundred and sixty eight patients.",
        )];

        let first = synthesizer.synthesize("What does the study predict?", &evidence);
        let second = synthesizer.synthesize("What does the study predict?", &evidence);
        assert_eq!(first.to_string(), second.to_string());
        assert!(first.is_summary());
    }
}
