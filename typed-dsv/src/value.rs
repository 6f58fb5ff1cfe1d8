//! Typed cell values with type-safe accessors

use crate::error::{Error, Result};
use std::fmt;

/// One typed value inside a row.
///
/// There is no dedicated empty variant: an empty field converts to the
/// column type's zero value (see
/// [`ColumnType::zero_value`](crate::ColumnType::zero_value)).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Signed integer value
    Integer(i64),
    /// Unsigned integer value
    Unsigned(u64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Text value
    Text(String),
}

impl Value {
    /// Render the value back to field text
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_dsv::Value;
    ///
    /// assert_eq!(Value::Integer(-7).to_field_string(), "-7");
    /// assert_eq!(Value::Text("us".to_string()).to_field_string(), "us");
    /// ```
    pub fn to_field_string(&self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Unsigned(u) => u.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Get the value as a signed integer, if it is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as an unsigned integer, if it is an unsigned value
    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Get the value as a float, if it is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is a boolean value
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as text, if it is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to text, consuming self
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type of this value
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Unsigned(_) => "Unsigned",
            Self::Float(_) => "Float",
            Self::Boolean(_) => "Boolean",
            Self::Text(_) => "Text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_field_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Self::Unsigned(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Self::Unsigned(u64::from(u))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(Error::InvalidValue {
                index: 0,
                column_type: "INTEGER".to_string(),
                value: value.to_field_string(),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Float(x) => Ok(x),
            _ => Err(Error::InvalidValue {
                index: 0,
                column_type: "FLOAT".to_string(),
                value: value.to_field_string(),
            }),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(Error::InvalidValue {
                index: 0,
                column_type: "TEXT".to_string(),
                value: value.to_field_string(),
            }),
        }
    }
}
