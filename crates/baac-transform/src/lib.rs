//! BAAC accident record transformation crate.
//!
//! Provides the field-normalization rules for the four BAAC tables and the
//! table-driven pipelines that apply them row by row.
//!
//! # Overview
//!
//! This crate provides:
//! - **Normalization functions**: sentinel handling, range checks, code lists,
//!   addresses, department and commune codes, date assembly
//! - **Rule tables**: one declarative column table per record kind
//! - **Pass execution**: stream raw records from any source into any [`RowSink`]
//!
//! # Example
//!
//! ```ignore
//! use baac_model::{RecordKind, RowErrorPolicy};
//! use baac_transform::{build_pipeline, run_pass};
//!
//! let pipeline = build_pipeline(RecordKind::Vehicles, 2009);
//! let mut sink = Vec::new();
//! let stats = run_pass(&pipeline, &headers, rows, &mut sink, RowErrorPolicy::FailFast)?;
//! ```

mod error;
mod executor;
mod pass;
mod tables;
mod types;

pub mod normalization;

// Core types
pub use types::{FieldRule, KindPipeline, TransformType};

// Error type
pub use error::{Result, TransformError};

// Rule tables
pub use tables::{GPS_CODES, MIN_BIRTH_YEAR, build_pipeline};

// Execution
pub use executor::execute_record;
pub use pass::{
    MAX_DIAGNOSTICS, PassStats, RowDiagnostic, RowSink, run_pass, run_pass_with_stats,
};
