// file: src/parser/sentences.rs
// description: whitespace normalization and sentence segmentation
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("WHITESPACE_RUN regex is valid");

    // The terminal punctuation stays with the sentence before it.
    static ref SENTENCE_BOUNDARY: Regex =
        Regex::new(r"[.!?]\s+").expect("SENTENCE_BOUNDARY regex is valid");
}

/// Fragments at or below this many characters are discarded.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 40;

/// Collapse whitespace runs to a single space and trim.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    min_chars: usize,
}

impl SentenceSegmenter {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Split `text` into normalized sentences longer than the minimum length.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);

        split_sentences(&normalized)
            .into_iter()
            .map(str::trim)
            // Exclusive floor: a fragment of exactly `min_chars` is dropped.
            .filter(|s| s.chars().count() > self.min_chars)
            .map(str::to_string)
            .collect()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SENTENCE_CHARS)
    }
}

/// Split after `.`, `!` or `?` when followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
