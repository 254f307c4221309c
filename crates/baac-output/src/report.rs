//! Machine-readable summary of a normalization run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use baac_model::{DatasetPaths, RecordKind, RowErrorPolicy};
use baac_transform::PassStats;

use crate::error::{OutputError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    Completed,
    Failed,
}

/// Outcome of one record-kind pass.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub kind: RecordKind,
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: PassStatus,
    #[serde(flatten)]
    pub stats: PassStats,
    pub elapsed_ms: u64,
    /// Why the pass failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PassReport {
    pub fn completed(kind: RecordKind, paths: &DatasetPaths, stats: PassStats, elapsed_ms: u64) -> Self {
        Self {
            kind,
            input: paths.input.clone(),
            output: paths.output.clone(),
            status: PassStatus::Completed,
            stats,
            elapsed_ms,
            error: None,
        }
    }

    /// `stats` holds whatever the pass handled before it stopped; rows already
    /// written stay in the output file.
    pub fn failed(
        kind: RecordKind,
        paths: &DatasetPaths,
        stats: PassStats,
        error: String,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            kind,
            input: paths.input.clone(),
            output: paths.output.clone(),
            status: PassStatus::Failed,
            stats,
            elapsed_ms,
            error: Some(error),
        }
    }
}

/// All passes of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub year: i32,
    pub row_errors: RowErrorPolicy,
    pub passes: Vec<PassReport>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.passes
            .iter()
            .any(|pass| pass.status == PassStatus::Failed)
    }

    pub fn total_rows_written(&self) -> u64 {
        self.passes.iter().map(|pass| pass.stats.rows_written).sum()
    }

    pub fn total_rows_skipped(&self) -> u64 {
        self.passes.iter().map(|pass| pass.stats.rows_skipped).sum()
    }
}

/// Write `report` as pretty-printed JSON.
pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), passes = report.passes.len(), "run report written");
    Ok(())
}
