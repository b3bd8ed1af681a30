// file: src/parser/noise.rs
// description: boilerplate detection for acknowledgments, page artifacts and signatures

const NOISE_MARKERS: &[&str] = &[
    "acknowledg",
    "gratitude",
    "supervisor",
    "kaggle",
    "creativecommons",
    "here is the link",
    "page",
    "post office box",
    "signature",
    "date:",
];

#[derive(Debug, Clone, Default)]
pub struct NoiseFilter;

impl NoiseFilter {
    pub fn new() -> Self {
        Self
    }

    /// True when the sentence contains any boilerplate marker (case-insensitive).
    pub fn is_noise(&self, sentence: &str) -> bool {
        let lowered = sentence.to_lowercase();
        NOISE_MARKERS.iter().any(|m| lowered.contains(m))
    }

    pub fn retain_clean(&self, sentences: Vec<String>) -> Vec<String> {
        sentences.into_iter().filter(|s| !self.is_noise(s)).collect()
    }
}
