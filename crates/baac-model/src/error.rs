use thiserror::Error;

use crate::kind::RecordKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown record kind '{0}' (expected characteristics, persons, locations or vehicles)")]
    UnknownRecordKind(String),

    /// A normalized record does not have one value per output column.
    #[error("{kind} record has {actual} values but its schema declares {expected} columns")]
    SchemaMismatch {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },

    #[error("row has {actual} fields but the header declares {expected} columns")]
    FieldCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
