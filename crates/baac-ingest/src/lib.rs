//! BAAC data ingestion utilities.
//!
//! This crate opens the source tables of the export and streams them as
//! [`RawRecord`](baac_model::RawRecord)s.
//!
//! # Features
//!
//! - **Pre-flight checks**: fail before any row is read when an input file or
//!   output directory is missing
//! - **CSV Loading**: per-kind delimiter (tab for Characteristics, comma for
//!   the others), UTF-8 or Latin-1 input, one row in memory at a time
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use baac_ingest::CsvRowSource;
//! use baac_model::{InputEncoding, RecordKind};
//!
//! let source = CsvRowSource::open(
//!     Path::new("original_csv/usagers_2009.csv"),
//!     RecordKind::Persons,
//!     InputEncoding::Utf8,
//! )?;
//! for record in source {
//!     let record = record?;
//! }
//! ```

mod error;
mod preflight;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Pre-flight ===
pub use preflight::{check_dataset, check_input_file, check_output_path};

// === CSV Reading ===
pub use reader::CsvRowSource;
