//! Run configuration: TOML file plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use baac_model::{InputEncoding, RecordKind, RowErrorPolicy, RunConfig};

/// Command-line values layered over the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub year: Option<i32>,
    pub input_dir: Option<PathBuf>,
    /// Defaults to `input_dir`.
    pub output_dir: Option<PathBuf>,
    /// Kinds to process. Empty means every configured kind.
    pub kinds: Vec<RecordKind>,
    pub skip_invalid_rows: bool,
    pub encoding: Option<InputEncoding>,
}

/// Parse a TOML run configuration.
pub fn load_config_file(path: &Path) -> Result<RunConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Build the effective configuration.
///
/// The year is applied before directories so default file names carry it.
pub fn resolve_config(config_file: Option<&Path>, overrides: &RunOverrides) -> Result<RunConfig> {
    let mut config = match config_file {
        Some(path) => load_config_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(year) = overrides.year {
        config.year = year;
    }
    if overrides.skip_invalid_rows {
        config.row_errors = RowErrorPolicy::Skip;
    }
    if let Some(encoding) = overrides.encoding {
        config.input_encoding = encoding;
    }
    match (&overrides.input_dir, &overrides.output_dir) {
        (Some(input_dir), output_dir) => {
            let output_dir = output_dir.as_deref().unwrap_or(input_dir);
            config = config.with_directories(input_dir, output_dir);
        }
        (None, Some(_)) => bail!("--output-dir requires --input-dir"),
        (None, None) => {}
    }
    config.retain_kinds(&overrides.kinds);
    if config.datasets.is_empty() {
        bail!("no datasets to process: pass --input-dir or list [datasets.<kind>] in the config file");
    }
    Ok(config)
}
