//! One fixed-arity typed record produced from one input line

use crate::value::Value;

/// A single parsed row.
///
/// A row always holds exactly as many values as its reader declared
/// columns, positionally matching the declared column types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Create a row from typed values
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the number of values in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by column position
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get all values in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the row, returning its values
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Render the row back to one line of delimited text
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_dsv::{Row, Value};
    ///
    /// let row = Row::new(vec![Value::Integer(1), Value::Text("us".to_string())]);
    /// assert_eq!(row.to_line(';'), "1;us");
    /// ```
    pub fn to_line(&self, separator: char) -> String {
        self.values
            .iter()
            .map(Value::to_field_string)
            .collect::<Vec<_>>()
            .join(&separator.to_string())
    }
}
