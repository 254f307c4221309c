//! Streaming normalization pass over one record kind.
//!
//! A pass reads raw records one at a time, normalizes each through the kind's
//! rule table and hands it to a sink, so memory use does not grow with the
//! input size.

use std::convert::Infallible;
use std::error::Error;
use std::iter;

use baac_model::{ModelError, NormalizedRecord, RawRecord, RowErrorPolicy};
use serde::Serialize;
use tracing::{debug, info_span, warn};

use crate::error::{Result, TransformError};
use crate::executor::execute_record;
use crate::types::KindPipeline;

/// Maximum number of row diagnostics kept per pass.
pub const MAX_DIAGNOSTICS: usize = 50;

/// Destination of normalized records.
pub trait RowSink {
    type Error: Error + Send + Sync + 'static;

    /// Called once, before any record.
    fn write_header(&mut self, columns: &[&str]) -> std::result::Result<(), Self::Error>;

    fn write_record(&mut self, record: &NormalizedRecord) -> std::result::Result<(), Self::Error>;

    /// Flush buffered output. Called once after the last record.
    fn finish(&mut self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Collects records in memory.
impl RowSink for Vec<NormalizedRecord> {
    type Error = Infallible;

    fn write_header(&mut self, _columns: &[&str]) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    fn write_record(&mut self, record: &NormalizedRecord) -> std::result::Result<(), Self::Error> {
        self.push(record.clone());
        Ok(())
    }
}

/// A row left out of the output under [`RowErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDiagnostic {
    /// 1-based data row number (the header is not counted).
    pub row: u64,
    /// Empty when the whole row is malformed.
    pub column: String,
    pub message: String,
}

/// Counters for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub rows_read: u64,
    pub rows_written: u64,
    pub rows_skipped: u64,
    /// First [`MAX_DIAGNOSTICS`] skipped rows.
    pub diagnostics: Vec<RowDiagnostic>,
}

/// Normalize every record of `rows` into `sink`.
///
/// `headers` are checked against the rule table before the first row is read;
/// a missing column aborts the pass with nothing written. Rows that fail to
/// normalize, or whose width does not match the header, abort the pass under
/// [`RowErrorPolicy::FailFast`] and are counted and dropped under
/// [`RowErrorPolicy::Skip`]. Other source failures and sink failures always
/// abort.
pub fn run_pass<I, E, S>(
    pipeline: &KindPipeline,
    headers: &[String],
    rows: I,
    sink: &mut S,
    policy: RowErrorPolicy,
) -> Result<PassStats>
where
    I: IntoIterator<Item = std::result::Result<RawRecord, E>>,
    E: Error + Send + Sync + 'static,
    S: RowSink,
{
    let mut stats = PassStats::default();
    run_pass_with_stats(pipeline, headers, rows, sink, policy, &mut stats)?;
    Ok(stats)
}

/// [`run_pass`] counting into `stats`, which keeps the rows handled so far
/// when the pass aborts.
pub fn run_pass_with_stats<I, E, S>(
    pipeline: &KindPipeline,
    headers: &[String],
    rows: I,
    sink: &mut S,
    policy: RowErrorPolicy,
    stats: &mut PassStats,
) -> Result<()>
where
    I: IntoIterator<Item = std::result::Result<RawRecord, E>>,
    E: Error + Send + Sync + 'static,
    S: RowSink,
{
    let kind = pipeline.kind;
    let span = info_span!("pass", kind = %kind);
    let _guard = span.enter();

    let missing = pipeline.missing_columns(headers);
    if !missing.is_empty() {
        return Err(TransformError::MissingColumns {
            kind,
            columns: missing,
        });
    }

    let sink_error = |err: S::Error| TransformError::Sink {
        kind,
        source: Box::new(err),
    };
    sink.write_header(kind.output_columns())
        .map_err(sink_error)?;

    for (idx, row) in rows.into_iter().enumerate() {
        let row_number = idx as u64 + 1;
        let record = match row {
            Ok(record) => record,
            Err(err) if is_malformed_row(&err) => {
                stats.rows_read += 1;
                if policy == RowErrorPolicy::Skip {
                    skip_row(stats, row_number, "", &err);
                    continue;
                }
                return Err(TransformError::MalformedRow {
                    kind,
                    row: row_number,
                    source: Box::new(err),
                });
            }
            Err(err) => {
                return Err(TransformError::Source {
                    kind,
                    row: row_number,
                    source: Box::new(err),
                });
            }
        };
        stats.rows_read += 1;

        match execute_record(pipeline, row_number, &record) {
            Ok(normalized) => {
                sink.write_record(&normalized).map_err(sink_error)?;
                stats.rows_written += 1;
            }
            Err(TransformError::InvalidRow {
                row, column, source, ..
            }) if policy == RowErrorPolicy::Skip => {
                skip_row(stats, row, column, &source);
            }
            Err(err) => return Err(err),
        }
    }

    sink.finish().map_err(sink_error)?;
    debug!(
        rows_read = stats.rows_read,
        rows_written = stats.rows_written,
        rows_skipped = stats.rows_skipped,
        "pass finished"
    );
    Ok(())
}

fn skip_row(stats: &mut PassStats, row: u64, column: &str, error: &dyn Error) {
    warn!(row, column, error = %error, "skipping row");
    stats.rows_skipped += 1;
    if stats.diagnostics.len() < MAX_DIAGNOSTICS {
        stats.diagnostics.push(RowDiagnostic {
            row,
            column: column.to_string(),
            message: error.to_string(),
        });
    }
}

/// True when the source reported a row whose width does not match the header.
fn is_malformed_row(err: &(dyn Error + 'static)) -> bool {
    iter::successors(Some(err), |err: &&(dyn Error + 'static)| (*err).source()).any(|err| {
        matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::FieldCountMismatch { .. })
        )
    })
}
