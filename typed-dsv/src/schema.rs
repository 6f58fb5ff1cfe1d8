//! Declared column layout and the per-column parser table

use crate::column::ColumnType;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;
use std::fmt;

/// A per-column conversion function from field text to a typed value
pub type ColumnParser = Box<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// Ordered column declaration with an index-aligned parser table.
///
/// The declared types and the parser table always have the same length,
/// and both are fixed for the life of any reader the schema is handed to.
/// Default parsers come from [`ColumnType::parse_value`]; individual
/// columns can be given a custom parser with [`Schema::set_parser`] before
/// the schema is attached to a reader.
pub struct Schema {
    columns: Vec<ColumnType>,
    parsers: Vec<ColumnParser>,
}

impl Schema {
    /// Create a schema with the default parser for every declared column
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_dsv::{ColumnType, Schema};
    ///
    /// let schema = Schema::new(&[ColumnType::Text, ColumnType::Integer]);
    /// assert_eq!(schema.arity(), 2);
    /// ```
    pub fn new(columns: &[ColumnType]) -> Self {
        let parsers = columns
            .iter()
            .map(|column| {
                let column = *column;
                Box::new(move |field: &str| column.parse_value(field)) as ColumnParser
            })
            .collect();

        Self {
            columns: columns.to_vec(),
            parsers,
        }
    }

    /// Get the declared number of columns
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Get the declared column types in order
    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Get a declared column type by position
    pub fn column(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).copied()
    }

    /// Replace the parser for one column.
    ///
    /// The declared column type is unchanged; the parser decides what
    /// [`Value`] it produces. Custom parsers are expected to signal
    /// failure with [`Error::InvalidValue`].
    pub fn set_parser<F>(&mut self, index: usize, parser: F) -> Result<()>
    where
        F: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        if index >= self.parsers.len() {
            return Err(Error::ColumnOutOfRange {
                index,
                arity: self.parsers.len(),
            });
        }
        self.parsers[index] = Box::new(parser);
        Ok(())
    }

    /// Convert one tokenized line into a typed row.
    ///
    /// Applies parser `i` to field `i` for every position; no column's
    /// conversion depends on another's result. The conversion is atomic:
    /// the first failing column aborts the whole row and no partial row is
    /// observable.
    pub fn parse_row(&self, fields: &[String]) -> Result<Row> {
        if fields.len() != self.columns.len() {
            return Err(Error::BadRowLength {
                expected: self.columns.len(),
                actual: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for (index, (field, parser)) in fields.iter().zip(self.parsers.iter()).enumerate() {
            let value = parser(field).map_err(|mut err| {
                if let Error::InvalidValue { index: at, .. } = &mut err {
                    *at = index;
                }
                err
            })?;
            values.push(value);
        }

        Ok(Row::new(values))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_row() {
        let schema = Schema::new(&[
            ColumnType::Text,
            ColumnType::Integer,
            ColumnType::Float,
        ]);

        let row = schema.parse_row(&fields(&["us", "42", "2.5"])).unwrap();
        assert_eq!(
            row.values(),
            &[
                Value::Text("us".to_string()),
                Value::Integer(42),
                Value::Float(2.5),
            ]
        );
    }

    #[test]
    fn test_parse_row_is_atomic() {
        let schema = Schema::new(&[ColumnType::Integer, ColumnType::Integer]);
        let result = schema.parse_row(&fields(&["1", "oops"]));

        assert!(matches!(
            result,
            Err(Error::InvalidValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_conversion_error_names_failing_column() {
        let schema = Schema::new(&[
            ColumnType::Text,
            ColumnType::Text,
            ColumnType::Float,
        ]);
        let err = schema
            .parse_row(&fields(&["a", "b", "not-a-number"]))
            .unwrap_err();

        match err {
            Error::InvalidValue {
                index,
                column_type,
                value,
            } => {
                assert_eq!(index, 2);
                assert_eq!(column_type, "FLOAT");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let schema = Schema::new(&[ColumnType::Integer, ColumnType::Integer]);

        assert!(matches!(
            schema.parse_row(&fields(&["1"])),
            Err(Error::BadRowLength {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            schema.parse_row(&fields(&["1", "2", "3"])),
            Err(Error::BadRowLength {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_custom_parser() {
        let mut schema = Schema::new(&[ColumnType::Integer]);
        schema
            .set_parser(0, |field| {
                field
                    .trim()
                    .parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| Error::InvalidValue {
                        index: 0,
                        column_type: "INTEGER".to_string(),
                        value: field.to_string(),
                    })
            })
            .unwrap();

        let row = schema.parse_row(&fields(&["  7  "])).unwrap();
        assert_eq!(row.values(), &[Value::Integer(7)]);
    }

    #[test]
    fn test_set_parser_out_of_range() {
        let mut schema = Schema::new(&[ColumnType::Integer]);
        let result = schema.set_parser(3, |_| Ok(Value::Integer(0)));

        assert!(matches!(
            result,
            Err(Error::ColumnOutOfRange { index: 3, arity: 1 })
        ));
    }

    #[test]
    fn test_debug_omits_parsers() {
        let schema = Schema::new(&[ColumnType::Float]);
        let rendered = format!("{schema:?}");
        assert!(rendered.contains("Float"));
    }
}
