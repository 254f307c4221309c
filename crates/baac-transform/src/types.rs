//! Core types for the table-driven normalization pipelines.

use std::fmt;

use baac_model::RecordKind;

/// Rule applied to produce one output column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformType {
    /// Raw cell copied as-is, sentinels included.
    CopyRaw,

    /// Sentinels cleared, everything else kept.
    Clean,

    /// Inclusive range check with passthrough of out-of-range values.
    Range { min: i64, max: i64 },

    /// Vehicle category code list (1-40, 99).
    VehicleCategory,

    /// Safety-equipment code list.
    SecurityCode,

    /// Member of a fixed set of letter codes.
    LetterEnum { allowed: &'static [&'static str] },

    /// Commune number right-padded to three digits.
    CommuneCode,

    /// Sentinel cleaning followed by address normalization.
    Address,

    /// Sentinel cleaning followed by department-code normalization.
    PostalCode,

    /// Date/time built from the source month column plus day and time columns.
    DateTime {
        day: &'static str,
        hour_minute: &'static str,
    },
}

impl fmt::Display for TransformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformType::CopyRaw => f.write_str("raw copy"),
            TransformType::Clean => f.write_str("clean"),
            TransformType::Range { min, max } => write!(f, "range {min}..={max}"),
            TransformType::VehicleCategory => f.write_str("vehicle category (1-40, 99)"),
            TransformType::SecurityCode => f.write_str("safety equipment code"),
            TransformType::LetterEnum { allowed } => write!(f, "one of {}", allowed.join("/")),
            TransformType::CommuneCode => f.write_str("commune code"),
            TransformType::Address => f.write_str("address"),
            TransformType::PostalCode => f.write_str("department code"),
            TransformType::DateTime { .. } => f.write_str("date/time"),
        }
    }
}

/// A single output column and how it is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Output column name.
    pub target: &'static str,

    /// Source column read by the rule (the month column for date/time rules).
    pub source: &'static str,

    pub transform: TransformType,
}

impl FieldRule {
    pub const fn new(target: &'static str, source: &'static str, transform: TransformType) -> Self {
        Self {
            target,
            source,
            transform,
        }
    }

    /// Every source column this rule reads.
    pub fn source_columns(&self) -> Vec<&'static str> {
        match &self.transform {
            TransformType::DateTime { day, hour_minute } => vec![self.source, *day, *hour_minute],
            _ => vec![self.source],
        }
    }
}

/// Ordered rule table for one record kind.
#[derive(Debug, Clone)]
pub struct KindPipeline {
    pub kind: RecordKind,

    /// Dataset year, used for date assembly.
    pub year: i32,

    /// Rules in output column order.
    pub rules: Vec<FieldRule>,
}

impl KindPipeline {
    /// Output column names, in order.
    pub fn targets(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.target).collect()
    }

    /// Source columns the input must provide, deduplicated, in first-use order.
    pub fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = Vec::new();
        for column in self.rules.iter().flat_map(FieldRule::source_columns) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        columns
    }

    /// Required columns absent from `headers`.
    pub fn missing_columns<S: AsRef<str>>(&self, headers: &[S]) -> Vec<String> {
        self.required_columns()
            .into_iter()
            .filter(|column| !headers.iter().any(|header| header.as_ref() == *column))
            .map(str::to_string)
            .collect()
    }
}
