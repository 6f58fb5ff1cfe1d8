//! Basic parsing example
//!
//! This example reads a small semicolon-separated document with a header
//! line and prints every typed row. The tracing subscriber makes the
//! reader's skip/parse events visible; run with `RUST_LOG=trace` to see
//! them.

use std::io::Cursor;
use typed_dsv::{ColumnType, Error, Reader, ReaderConfig, Schema};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let data = "\
region;build id;version
us;61491;11.1.7.61491
eu;61492;11.1.7.61492

kr;61265;11.1.5.61265";

    println!("=== Basic Parsing Example ===\n");

    let schema = Schema::new(&[ColumnType::Text, ColumnType::Integer, ColumnType::Text]);
    let config = ReaderConfig::default().with_skip_first_lines(1);

    let mut reader = Reader::with_config(schema, config);
    reader.open_stream(Cursor::new(data));

    println!("1. Reading rows (header skipped, empty line discarded)...");
    let produced = reader.read_all()?;
    println!("   ✅ Read {produced} rows\n");

    println!("2. Accumulated rows:");
    for (index, row) in reader.rows().iter().enumerate() {
        println!("   row {index}: {}", row.to_line(';'));
    }

    println!("\n3. Indexed access:");
    if let Some(row) = reader.get_row(1) {
        println!(
            "   row 1 region = {:?}, build id = {:?}",
            row.get(0).and_then(typed_dsv::Value::as_text),
            row.get(1).and_then(typed_dsv::Value::as_integer),
        );
    }

    reader.close();
    Ok(())
}
