//! Output writers for normalized BAAC tables and run reports.

mod csv_sink;
mod error;
mod report;

pub use csv_sink::CsvRowSink;
pub use error::{OutputError, Result};
pub use report::{PassReport, PassStatus, RunReport, write_run_report};
