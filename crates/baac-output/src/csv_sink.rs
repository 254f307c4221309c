//! Normalized table writer.
//!
//! Output is comma-delimited with quotes only where a field needs them, and
//! CRLF record terminators, matching the files produced by earlier runs.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use baac_model::NormalizedRecord;
use baac_transform::RowSink;

use crate::error::{OutputError, Result};

/// [`RowSink`] writing one CSV line per record.
pub struct CsvRowSink<W: Write> {
    path: PathBuf,
    writer: csv::Writer<W>,
}

impl CsvRowSink<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_writer(file, path))
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Wrap any writer. `path` is only used in diagnostics.
    pub fn from_writer(writer: W, path: &Path) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b',')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        Self {
            path: path.to_path_buf(),
            writer,
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.writer.into_inner().map_err(|err| OutputError::Io {
            path,
            source: err.into_error(),
        })
    }

    fn csv_error(&self, source: csv::Error) -> OutputError {
        OutputError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    type Error = OutputError;

    fn write_header(&mut self, columns: &[&str]) -> Result<()> {
        self.writer
            .write_record(columns)
            .map_err(|source| self.csv_error(source))
    }

    fn write_record(&mut self, record: &NormalizedRecord) -> Result<()> {
        self.writer
            .write_record(record.to_fields())
            .map_err(|source| self.csv_error(source))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| OutputError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
