//! Raw input rows and normalized output rows.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ModelError, Result};
use crate::kind::RecordKind;

/// One input row: column name to raw cell text, in header order.
///
/// Headers are shared between all rows of a source, so building a record only
/// allocates its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl RawRecord {
    pub fn new(headers: Arc<[String]>, values: Vec<String>) -> Result<Self> {
        if headers.len() != values.len() {
            return Err(ModelError::FieldCountMismatch {
                expected: headers.len(),
                actual: values.len(),
            });
        }
        Ok(Self { headers, values })
    }

    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .unzip();
        Self {
            headers: headers.into(),
            values,
        }
    }

    /// Raw value of `column`, or `None` when the source has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn columns(&self) -> &[String] {
        &self.headers
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single normalized output value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// No data.
    Empty,
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// The textual `"0"` emitted for a missing value whose range starts at 0.
    /// Distinct from an observed `Integer(0)`.
    pub fn zero_default() -> Self {
        CellValue::Text("0".to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Dates render as `YYYY-MM-DD`, date-times as `YYYY-MM-DD HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CellValue::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// One output row, holding exactly one value per column of its kind's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    kind: RecordKind,
    values: Vec<CellValue>,
}

impl NormalizedRecord {
    pub fn new(kind: RecordKind, values: Vec<CellValue>) -> Result<Self> {
        let expected = kind.output_columns().len();
        if values.len() != expected {
            return Err(ModelError::SchemaMismatch {
                kind,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { kind, values })
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Value of an output column by name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.kind
            .output_columns()
            .iter()
            .position(|name| *name == column)
            .map(|idx| &self.values[idx])
    }

    /// Rendered field strings, in schema order.
    pub fn to_fields(&self) -> Vec<String> {
        self.values.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_lookup_by_column() {
        let record = RawRecord::from_pairs([("Num_Acc", "200900000001"), ("lum", "")]);
        assert_eq!(record.get("Num_Acc"), Some("200900000001"));
        assert_eq!(record.get("lum"), Some(""));
        assert_eq!(record.get("agg"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn raw_record_rejects_short_rows() {
        let headers: Arc<[String]> = vec!["a".to_string(), "b".to_string()].into();
        let err = RawRecord::new(headers, vec!["1".to_string()]).unwrap_err();
        assert_eq!(
            err,
            ModelError::FieldCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn cell_values_render_like_the_export() {
        let date = NaiveDate::from_ymd_opt(2009, 3, 15).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "2009-03-15");
        assert_eq!(
            CellValue::DateTime(date.and_hms_opt(8, 0, 0).unwrap()).to_string(),
            "2009-03-15 08:00:00"
        );
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::zero_default().to_string(), "0");
        assert_ne!(CellValue::zero_default(), CellValue::Integer(0));
    }

    #[test]
    fn normalized_record_enforces_schema_width() {
        let err = NormalizedRecord::new(RecordKind::Vehicles, vec![CellValue::Empty]).unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch { expected: 7, actual: 1, .. }));
    }
}
