// file: src/pipeline/summaries.rs
// description: batch summarization of structured document JSON files
// reference: directory scanning with walkdir

use crate::error::{PipelineError, Result};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::synthesis::{FrequencySummarizer, StructuredChunk};
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

/// Writes `<stem>_summary.txt` for every `*.json` document in a directory.
pub struct SummaryPipeline {
    summarizer: FrequencySummarizer,
    output_dir: PathBuf,
    show_progress: bool,
}

enum FileOutcome {
    Written(PathBuf),
    Empty,
}

impl SummaryPipeline {
    pub fn new(summarizer: FrequencySummarizer, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            summarizer,
            output_dir: output_dir.into(),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Top-level `*.json` files of `input_dir`, sorted by name.
    pub fn scan(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        Validator::validate_directory(input_dir)?;

        let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();

        files.sort();
        Ok(files)
    }

    /// Unreadable and empty documents are logged and skipped.
    pub fn run(&self, input_dir: &Path) -> Result<PipelineStats> {
        let files = self.scan(input_dir)?;
        info!("Found {} structured documents", files.len());

        fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let tracker = if self.show_progress {
            ProgressTracker::new(files.len())
        } else {
            ProgressTracker::hidden(files.len())
        };

        for path in &files {
            let name = path.file_name().map(|n| n.to_string_lossy().to_string());
            tracker.set_message(name.unwrap_or_default());

            match self.summarize_file(path) {
                Ok(FileOutcome::Written(output)) => {
                    info!("Saved summary to {}", output.display());
                    tracker.inc_files_processed();
                }
                Ok(FileOutcome::Empty) => {
                    warn!("No text found in {}", path.display());
                    tracker.inc_files_skipped();
                }
                Err(e) => {
                    error!("Could not summarize {}: {}", path.display(), e);
                    tracker.inc_files_failed();
                }
            }
        }

        tracker.finish();
        Ok(tracker.get_stats())
    }

    fn summarize_file(&self, path: &Path) -> Result<FileOutcome> {
        let raw = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let chunks: Vec<StructuredChunk> = serde_json::from_str(&raw)?;

        let Some(summary) = self.summarizer.summarize_chunks(&chunks) else {
            return Ok(FileOutcome::Empty);
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());
        let output = self.output_dir.join(format!("{}_summary.txt", stem));

        fs::write(&output, summary).map_err(|source| PipelineError::FileOperation {
            path: output.clone(),
            source,
        })?;

        Ok(FileOutcome::Written(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_summaries_and_skips_bad_files() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        fs::write(
            input.path().join("nda.json"),
            r#"[{"text": "The receiving party shall protect information."}, {"text": "Terms last two years."}]"#,
        )
        .unwrap();
        fs::write(input.path().join("blank.json"), r#"[{"text": ""}]"#).unwrap();
        fs::write(input.path().join("broken.json"), "{not json").unwrap();
        fs::write(input.path().join("notes.txt"), "ignored").unwrap();

        let pipeline = SummaryPipeline::new(FrequencySummarizer::default(), output.path())
            .with_progress(false);
        let stats = pipeline.run(input.path()).unwrap();

        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_failed, 1);

        let summary = fs::read_to_string(output.path().join("nda_summary.txt")).unwrap();
        assert_eq!(
            summary,
            "The receiving party shall protect information. Terms last two years."
        );
    }

    #[test]
    fn test_scan_rejects_missing_directory() {
        let pipeline = SummaryPipeline::new(FrequencySummarizer::default(), "unused");
        assert!(pipeline.scan(Path::new("/nonexistent/structured_docs")).is_err());
    }
}
