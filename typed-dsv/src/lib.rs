//! # typed-dsv
//!
//! A typed reader for delimiter-separated text: lines of an input stream
//! are tokenized into fixed-arity field lists and converted, column by
//! column, into strongly-typed rows.
//!
//! The pipeline has three parts: the tokenizer splits one line into
//! fields honoring a separator, a quote, and a single-character escape;
//! the schema applies a per-column conversion function to each field; the
//! reader owns the stream and the growing row buffer and drives the read
//! loop with its line-skip policies.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use typed_dsv::{ColumnType, Reader, Schema};
//!
//! let schema = Schema::new(&[ColumnType::Float, ColumnType::Float, ColumnType::Float]);
//! let mut reader = Reader::new(schema);
//! reader.open_stream(Cursor::new("1;2;3\n4;5;6\n"));
//!
//! let produced = reader.read_all()?;
//! assert_eq!(produced, 2);
//! assert_eq!(reader.get_row(0).unwrap().get(0).unwrap().as_float(), Some(1.0));
//! # Ok::<(), typed_dsv::Error>(())
//! ```
//!
//! ## Reading from a file
//!
//! ```rust,no_run
//! use typed_dsv::{ColumnType, Reader, ReaderConfig, Schema};
//!
//! let schema = Schema::new(&[ColumnType::Text, ColumnType::Integer]);
//! let config = ReaderConfig::default().with_skip_first_lines(1);
//! let mut reader = Reader::with_config(schema, config);
//!
//! reader.open("builds.csv");
//! if reader.is_open() {
//!     let produced = reader.read_rows(100)?;
//!     println!("read {produced} rows");
//! }
//! reader.close();
//! # Ok::<(), typed_dsv::Error>(())
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod reader;
pub mod row;
pub mod schema;
pub mod tokenizer;
pub mod value;

pub use column::ColumnType;
pub use config::ReaderConfig;
pub use error::{Error, Result};
pub use reader::Reader;
pub use row::Row;
pub use schema::{ColumnParser, Schema};
pub use tokenizer::split_line;
pub use value::Value;
