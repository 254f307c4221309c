//! Error types for BAAC data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use baac_model::ModelError;

/// Errors that can occur while opening or reading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input path exists but is not a regular file.
    #[error("input path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Directory meant to receive an output file does not exist.
    #[error("output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// Failed to read file metadata.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("CSV file has no header row: {path}")]
    NoHeader { path: PathBuf },

    /// A cell is not valid UTF-8 (see the `latin-1` input encoding).
    #[error("invalid UTF-8 in {path} at line {line}")]
    InvalidUtf8 { path: PathBuf, line: u64 },

    /// A row does not match the header width.
    #[error("malformed row in {path} at line {line}: {source}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/usagers_2009.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /data/usagers_2009.csv");
    }

    #[test]
    fn test_utf8_error_display() {
        let err = IngestError::InvalidUtf8 {
            path: PathBuf::from("lieux_2009.csv"),
            line: 42,
        };
        assert_eq!(err.to_string(), "invalid UTF-8 in lieux_2009.csv at line 42");
    }
}
