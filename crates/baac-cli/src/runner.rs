//! Runs one normalization pass per configured record kind.
//!
//! Each pass is independent: a missing file or a bad row stops that kind
//! only, and the outcome of every pass ends up in the [`RunReport`].

use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{debug, error, info, info_span};

use baac_ingest::{CsvRowSource, check_dataset};
use baac_model::{DatasetPaths, RecordKind, RunConfig};
use baac_output::{CsvRowSink, PassReport, RunReport};
use baac_transform::{PassStats, build_pipeline, run_pass_with_stats};

/// Run every dataset in `config`, in record-kind order.
pub fn run(config: &RunConfig) -> RunReport {
    let span = info_span!("run", year = config.year);
    let _guard = span.enter();

    let passes = config
        .datasets
        .iter()
        .map(|(&kind, paths)| run_kind(config, kind, paths))
        .collect();
    RunReport {
        year: config.year,
        row_errors: config.row_errors,
        passes,
    }
}

fn run_kind(config: &RunConfig, kind: RecordKind, paths: &DatasetPaths) -> PassReport {
    info!(kind = %kind, input = %paths.input.display(), "pass started");
    let start = Instant::now();
    let mut stats = PassStats::default();
    let outcome = normalize_dataset(config, kind, paths, &mut stats);
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    match outcome {
        Ok(()) => {
            info!(
                kind = %kind,
                rows_written = stats.rows_written,
                rows_skipped = stats.rows_skipped,
                elapsed_ms,
                "pass finished"
            );
            PassReport::completed(kind, paths, stats, elapsed_ms)
        }
        Err(err) => {
            let message = format!("{err:#}");
            error!(
                kind = %kind,
                rows_written = stats.rows_written,
                error = %message,
                "pass failed"
            );
            PassReport::failed(kind, paths, stats, message, elapsed_ms)
        }
    }
}

/// Normalize one input file into its output file, counting into `stats`.
///
/// The output is only created once the input exists and has every column the
/// kind needs. On a later failure `stats` matches what the output holds.
pub fn normalize_dataset(
    config: &RunConfig,
    kind: RecordKind,
    paths: &DatasetPaths,
    stats: &mut PassStats,
) -> Result<()> {
    check_dataset(kind, paths)?;
    let pipeline = build_pipeline(kind, config.year);
    let source = CsvRowSource::open(&paths.input, kind, config.input_encoding)?;
    let headers = source.headers().to_vec();

    let missing = pipeline.missing_columns(&headers);
    if !missing.is_empty() {
        bail!(
            "{} is missing column(s): {}",
            paths.input.display(),
            missing.join(", ")
        );
    }
    debug!(output = %paths.output.display(), "writing");

    let mut sink = CsvRowSink::create(&paths.output)?;
    run_pass_with_stats(
        &pipeline,
        &headers,
        source,
        &mut sink,
        config.row_errors,
        stats,
    )?;
    Ok(())
}
