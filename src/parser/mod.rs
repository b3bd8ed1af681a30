// file: src/parser/mod.rs
// description: sentence parsing module exports
// reference: internal module structure

pub mod noise;
pub mod sentences;

pub use noise::NoiseFilter;
pub use sentences::{SentenceSegmenter, normalize, split_sentences};
