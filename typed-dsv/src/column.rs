//! Declared column types and their default field conversions

use crate::error::{Error, Result};
use crate::value::Value;
use std::fmt;

/// The declared target type of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnType {
    /// Signed 64-bit integer column
    Integer,
    /// Unsigned 64-bit integer column
    Unsigned,
    /// 64-bit floating point column
    Float,
    /// Boolean column, accepting `true`/`false` and `1`/`0`
    Boolean,
    /// Text column; the identity mapping, never fails
    Text,
}

impl ColumnType {
    /// Get the type name (uppercase)
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Unsigned => "UNSIGNED",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Text => "TEXT",
        }
    }

    /// The value an empty field converts to
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_dsv::{ColumnType, Value};
    ///
    /// assert_eq!(ColumnType::Integer.zero_value(), Value::Integer(0));
    /// assert_eq!(ColumnType::Text.zero_value(), Value::Text(String::new()));
    /// ```
    pub fn zero_value(&self) -> Value {
        match self {
            ColumnType::Integer => Value::Integer(0),
            ColumnType::Unsigned => Value::Unsigned(0),
            ColumnType::Float => Value::Float(0.0),
            ColumnType::Boolean => Value::Boolean(false),
            ColumnType::Text => Value::Text(String::new()),
        }
    }

    /// Default conversion from one field substring to a typed value.
    ///
    /// An empty field yields [`ColumnType::zero_value`]. A non-empty field
    /// must convert fully; trailing unconverted content is an error. `Text`
    /// never fails and never transforms its input.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_dsv::{ColumnType, Value};
    ///
    /// assert_eq!(ColumnType::Float.parse_value("2.5")?, Value::Float(2.5));
    /// assert_eq!(ColumnType::Integer.parse_value("")?, Value::Integer(0));
    /// assert!(ColumnType::Integer.parse_value("12x").is_err());
    /// # Ok::<(), typed_dsv::Error>(())
    /// ```
    pub fn parse_value(&self, field: &str) -> Result<Value> {
        if field.is_empty() {
            return Ok(self.zero_value());
        }

        match self {
            ColumnType::Integer => field
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| self.invalid(field)),
            ColumnType::Unsigned => field
                .parse::<u64>()
                .map(Value::Unsigned)
                .map_err(|_| self.invalid(field)),
            ColumnType::Float => field
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.invalid(field)),
            ColumnType::Boolean => match field {
                "1" => Ok(Value::Boolean(true)),
                "0" => Ok(Value::Boolean(false)),
                _ => field
                    .parse::<bool>()
                    .map(Value::Boolean)
                    .map_err(|_| self.invalid(field)),
            },
            ColumnType::Text => Ok(Value::Text(field.to_string())),
        }
    }

    // Column index 0 is a placeholder; `Schema::parse_row` patches in the
    // failing column before the error reaches a caller.
    fn invalid(&self, field: &str) -> Error {
        Error::InvalidValue {
            index: 0,
            column_type: self.to_string(),
            value: field.to_string(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
