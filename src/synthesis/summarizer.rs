// file: src/synthesis/summarizer.rs
// description: word-frequency extractive summaries of structured documents
// reference: https://docs.rs/regex

use crate::parser::{normalize, split_sentences};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("WORD regex is valid");
}

pub const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// One chunk of a structured document as written by the section parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredChunk {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FrequencySummarizer {
    num_sentences: usize,
}

impl FrequencySummarizer {
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Join the non-empty chunk texts with single spaces and summarize them.
    pub fn summarize_chunks(&self, chunks: &[StructuredChunk]) -> Option<String> {
        let full_text = chunks
            .iter()
            .filter_map(|c| c.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if full_text.trim().is_empty() {
            return None;
        }

        Some(self.summarize(&full_text))
    }

    /// Pick the highest scoring sentences and return them in document order.
    ///
    /// A sentence scores the sum of the document-wide frequencies of its words.
    pub fn summarize(&self, text: &str) -> String {
        let text = normalize(text);
        let freq = word_frequencies(&text);

        let mut scored: Vec<(usize, &str)> = split_sentences(&text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                let score = WORD
                    .find_iter(s)
                    .map(|w| freq.get(&w.as_str().to_lowercase()).copied().unwrap_or(0))
                    .sum();
                (score, s)
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.num_sentences);

        // first occurrence position, as repeated sentences share it
        scored.sort_by_key(|(_, s)| text.find(s).unwrap_or(usize::MAX));

        scored
            .into_iter()
            .map(|(_, s)| s)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for FrequencySummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in WORD.find_iter(&text.to_lowercase()) {
        *freq.entry(word.as_str().to_string()).or_insert(0) += 1;
    }
    freq
}
