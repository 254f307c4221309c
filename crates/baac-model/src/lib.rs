//! Data model for the BAAC accident-table normalizer.

pub mod config;
pub mod error;
pub mod kind;
pub mod record;

pub use config::{DEFAULT_YEAR, DatasetPaths, InputEncoding, RowErrorPolicy, RunConfig};
pub use error::{ModelError, Result};
pub use kind::RecordKind;
pub use record::{CellValue, NormalizedRecord, RawRecord};
