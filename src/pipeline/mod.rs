// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod engine;
mod progress;
mod summaries;

pub use engine::{QueryEngine, QueryOutcome};
pub use progress::{PipelineStats, ProgressTracker};
pub use summaries::SummaryPipeline;
