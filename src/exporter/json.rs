// file: src/exporter/json.rs
// description: json export of answered questions with their evidence

use crate::error::{PipelineError, Result};
use crate::pipeline::QueryOutcome;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedAnswer<'a> {
    pub exported_at: String,
    /// Rendered answer text as shown in the terminal
    pub rendered: String,
    #[serde(flatten)]
    pub outcome: &'a QueryOutcome,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| PipelineError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// Write `outcome` to `answer_<timestamp>.json` and return the path.
    pub fn export_outcome(&self, outcome: &QueryOutcome, pretty: bool) -> Result<PathBuf> {
        let now = Utc::now();
        let exported = ExportedAnswer {
            exported_at: now.to_rfc3339(),
            rendered: outcome.answer.to_string(),
            outcome,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };

        let path = self
            .output_dir
            .join(format!("answer_{}.json", now.format("%Y%m%dT%H%M%S%.3f")));
        fs::write(&path, json).map_err(|source| PipelineError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!("Exported answer to {}", path.display());
        Ok(path)
    }
}
