//! Error types for pipeline execution.

use baac_model::{ModelError, RecordKind};
use thiserror::Error;

use crate::normalization::NormalizeError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while normalizing a record stream.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input lacks columns the rule table reads.
    #[error("{kind} input is missing column(s): {}", .columns.join(", "))]
    MissingColumns {
        kind: RecordKind,
        columns: Vec<String>,
    },

    /// A cell could not be normalized.
    #[error("{kind} row {row}, column '{column}': {source}")]
    InvalidRow {
        kind: RecordKind,
        row: u64,
        column: &'static str,
        #[source]
        source: NormalizeError,
    },

    /// A source row whose width does not match the header.
    #[error("{kind} row {row}: {source}")]
    MalformedRow {
        kind: RecordKind,
        row: u64,
        #[source]
        source: BoxError,
    },

    /// The row source failed to produce a record.
    #[error("{kind} row {row}: failed to read input: {source}")]
    Source {
        kind: RecordKind,
        row: u64,
        #[source]
        source: BoxError,
    },

    /// The row sink rejected a record.
    #[error("{kind}: failed to write output: {source}")]
    Sink {
        kind: RecordKind,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl TransformError {
    /// Row-level errors that a skip policy may recover from.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            TransformError::InvalidRow { .. } | TransformError::MalformedRow { .. }
        )
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
