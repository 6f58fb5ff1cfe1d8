//! Typed access example
//!
//! This example demonstrates how parsed rows expose their values through
//! type-specific accessors.

use std::io::Cursor;
use typed_dsv::{ColumnType, Error, Reader, Schema, Value};

fn main() -> Result<(), Error> {
    println!("=== Typed Access Example ===\n");

    let data = "\
us;61491;99.5;true
eu;61492;87.25;false
kr;;0;1";

    let schema = Schema::new(&[
        ColumnType::Text,
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::Boolean,
    ]);

    println!("1. Parsing document with mixed column types...");
    let mut reader = Reader::new(schema);
    reader.open_stream(Cursor::new(data));

    let produced = reader.read_all()?;
    println!(
        "   ✅ Parsed {produced} rows with {} columns\n",
        reader.schema().arity()
    );

    println!("2. Accessing typed values...");
    for (index, row) in reader.rows().iter().enumerate() {
        println!("   Row {}:", index + 1);

        for (column, value) in reader.schema().columns().iter().zip(row.values()) {
            println!("     {column} = {value} [{}]", value.value_type());
        }

        // type-specific access per column
        if let Some(region) = row.get(0).and_then(Value::as_text) {
            println!("     → region as text: '{region}'");
        }
        if let Some(build_id) = row.get(1).and_then(Value::as_integer) {
            println!("     → build id as number: {build_id}");
        }
        if let Some(progress) = row.get(2).and_then(Value::as_float) {
            println!("     → progress as float: {progress}");
        }

        println!();
    }

    // an empty field reads as the column's zero value
    let kr = reader.get_row(2).expect("three rows were read");
    assert_eq!(kr.get(1).and_then(Value::as_integer), Some(0));
    println!("3. Empty fields map to the declared type's zero value");

    reader.close();
    Ok(())
}
