//! Run configuration: dataset year, file locations and row-error policy.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kind::RecordKind;

/// Year of the BAAC export the source files belong to.
pub const DEFAULT_YEAR: i32 = 2009;

/// What to do with a row whose values cannot be normalized
/// (impossible date, non-numeric commune code, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowErrorPolicy {
    /// Abort the pass on the first bad row.
    #[default]
    FailFast,
    /// Log the row, leave it out of the output and keep going.
    Skip,
}

/// Character encoding of the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// ISO-8859-1, as shipped by older exports.
    #[serde(rename = "latin-1")]
    Latin1,
}

/// Input and output locations for one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Everything a normalization run needs, passed explicitly to the entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Year used to assemble dates and to bound birth years.
    pub year: i32,
    pub row_errors: RowErrorPolicy,
    pub input_encoding: InputEncoding,
    /// Datasets to process, keyed by kind. Kinds without an entry are not run.
    pub datasets: BTreeMap<RecordKind, DatasetPaths>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            row_errors: RowErrorPolicy::default(),
            input_encoding: InputEncoding::default(),
            datasets: BTreeMap::new(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_row_errors(mut self, policy: RowErrorPolicy) -> Self {
        self.row_errors = policy;
        self
    }

    #[must_use]
    pub fn with_input_encoding(mut self, encoding: InputEncoding) -> Self {
        self.input_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, kind: RecordKind, paths: DatasetPaths) -> Self {
        self.datasets.insert(kind, paths);
        self
    }

    /// Register every kind using the export's default file names under the
    /// given directories. Existing entries are replaced.
    #[must_use]
    pub fn with_directories(mut self, input_dir: &Path, output_dir: &Path) -> Self {
        for kind in RecordKind::ALL {
            let paths = DatasetPaths {
                input: input_dir.join(kind.default_input_file(self.year)),
                output: output_dir.join(kind.default_output_file(self.year)),
            };
            self.datasets.insert(kind, paths);
        }
        self
    }

    pub fn dataset(&self, kind: RecordKind) -> Option<&DatasetPaths> {
        self.datasets.get(&kind)
    }

    /// Keep only the given kinds. An empty slice keeps everything.
    pub fn retain_kinds(&mut self, kinds: &[RecordKind]) {
        if kinds.is_empty() {
            return;
        }
        self.datasets.retain(|kind, _| kinds.contains(kind));
    }
}
