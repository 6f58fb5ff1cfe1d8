//! Custom column parsers
//!
//! This example replaces default parsers in the schema's parser table:
//! one column reads hexadecimal hashes, another tolerates padded
//! integers.

use std::io::Cursor;
use typed_dsv::{ColumnType, Error, Reader, Schema, Value};

fn main() -> Result<(), Error> {
    println!("=== Custom Column Parsers ===\n");

    let data = "\
us; 61491 ;be2bb98d
eu; 61492 ;fac77b9c";

    let mut schema = Schema::new(&[
        ColumnType::Text,
        ColumnType::Integer,
        ColumnType::Unsigned,
    ]);

    // integers arrive space-padded; trim before converting
    schema.set_parser(1, |field| {
        field
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| Error::InvalidValue {
                index: 0,
                column_type: "INTEGER".to_string(),
                value: field.to_string(),
            })
    })?;

    // the hash column is hexadecimal
    schema.set_parser(2, |field| {
        u64::from_str_radix(field, 16)
            .map(Value::Unsigned)
            .map_err(|_| Error::InvalidValue {
                index: 0,
                column_type: "UNSIGNED".to_string(),
                value: field.to_string(),
            })
    })?;

    let mut reader = Reader::new(schema);
    reader.open_stream(Cursor::new(data));

    let produced = reader.read_all()?;
    println!("✅ Read {produced} rows through custom parsers\n");

    for row in reader.rows() {
        println!(
            "{}: build {} hash {:#010x}",
            row.get(0).and_then(Value::as_text).unwrap_or("?"),
            row.get(1).and_then(Value::as_integer).unwrap_or(0),
            row.get(2).and_then(Value::as_unsigned).unwrap_or(0),
        );
    }

    reader.close();
    Ok(())
}
