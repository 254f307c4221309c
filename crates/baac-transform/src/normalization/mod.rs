//! Normalization functions for BAAC accident fields.
//!
//! This module provides the per-column cleaning rules:
//! - **sentinel**: recognition of the "no data" tokens found in the export
//! - **numeric**: passthrough cleaning and inclusive range checks
//! - **codes**: vehicle category, safety equipment and letter code lists
//! - **location**: commune codes, street addresses and department codes
//! - **datetime**: date/time assembly from month, day and `HHMM` fields
//!
//! Every rule is a pure function of the raw cell text.

pub mod codes;
pub mod datetime;
pub mod location;
pub mod numeric;
pub mod sentinel;

use thiserror::Error;

// Re-export commonly used items
pub use codes::{clamp_letter_enum, clamp_security_code, clamp_vehicle_category};
pub use datetime::compose_datetime;
pub use location::{format_commune_code, normalize_address, normalize_postal_code};
pub use numeric::{clamp_range, clean, parse_integer};
pub use sentinel::{SENTINELS, is_sentinel, is_sentinel_char};

/// A raw value that cannot be turned into its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("'{value}' is not an integer")]
    NotAnInteger { value: String },

    #[error("no calendar date for year {year}, month '{month}', day '{day}'")]
    InvalidDate {
        year: i32,
        month: String,
        day: String,
    },

    #[error("'{value}' is not a valid HHMM time")]
    InvalidTime { value: String },
}
