//! Error types for tokenizing and typed row conversion

use thiserror::Error;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading typed rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row's field count does not match the declared column count
    #[error("Bad row length: expected {expected} fields, got {actual}")]
    BadRowLength { expected: usize, actual: usize },

    /// A field's text could not be fully converted to its column's type
    #[error("Unsupported format of '{value}' for column {index} ({column_type})")]
    InvalidValue {
        index: usize,
        column_type: String,
        value: String,
    },

    /// A parser override addressed a column that does not exist
    #[error("Column index {index} out of range for {arity} declared columns")]
    ColumnOutOfRange { index: usize, arity: usize },
}
