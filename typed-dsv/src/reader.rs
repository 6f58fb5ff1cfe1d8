//! Buffering reader that drives the tokenize-and-convert pipeline

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::Schema;
use crate::tokenizer::split_line;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Typed reader over a line-oriented character stream.
///
/// A reader moves through three states: unopened, open, closed. Opening
/// binds it to a file or an already-open stream; reading accumulates typed
/// rows in an append-only buffer; closing drops the stream and is
/// terminal. Reads against an unopened or closed reader produce zero rows
/// rather than an error.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use typed_dsv::{ColumnType, Reader, Schema};
///
/// let schema = Schema::new(&[ColumnType::Text, ColumnType::Integer]);
/// let mut reader = Reader::new(schema);
/// reader.open_stream(Cursor::new("us;61491\neu;61492\n"));
///
/// let produced = reader.read_all()?;
/// assert_eq!(produced, 2);
/// assert_eq!(reader.get_row(1).unwrap().get(1).unwrap().as_integer(), Some(61492));
/// # Ok::<(), typed_dsv::Error>(())
/// ```
pub struct Reader {
    schema: Schema,
    config: ReaderConfig,
    stream: Option<Box<dyn BufRead>>,
    rows: Vec<Row>,
    first_lines_skipped: bool,
}

impl Reader {
    /// Create an unopened reader with the default configuration
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, ReaderConfig::default())
    }

    /// Create an unopened reader with an explicit configuration
    pub fn with_config(schema: Schema, config: ReaderConfig) -> Self {
        Self {
            schema,
            config,
            stream: None,
            rows: Vec::new(),
            first_lines_skipped: false,
        }
    }

    /// Create a reader bound to a file immediately.
    ///
    /// A failed open is observable only through [`Reader::is_open`].
    pub fn from_path<P: AsRef<Path>>(schema: Schema, path: P) -> Self {
        let mut reader = Self::new(schema);
        reader.open(path);
        reader
    }

    /// Bind the reader to a file.
    ///
    /// A failed open leaves the reader without a stream; the failure is
    /// reported by [`Reader::is_open`] returning `false`, not as an error
    /// return.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                debug!(path = %path.display(), "opened input file");
                self.stream = Some(Box::new(BufReader::new(file)));
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "failed to open input file");
                self.stream = None;
            }
        }
    }

    /// Attach an already-open character stream
    pub fn open_stream<S>(&mut self, stream: S)
    where
        S: BufRead + 'static,
    {
        self.stream = Some(Box::new(stream));
    }

    /// Check whether the reader currently holds a readable stream
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Get the declared schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get the configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Get mutable access to the configuration.
    ///
    /// Settings may be changed between reads; `skip_first_lines` is
    /// applied only once, before the first read.
    pub fn config_mut(&mut self) -> &mut ReaderConfig {
        &mut self.config
    }

    /// Get the number of rows accumulated so far
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all accumulated rows in read order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by position in accumulated order
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Read every remaining row from the stream.
    ///
    /// Equivalent to `read_rows(usize::MAX)`.
    pub fn read_all(&mut self) -> Result<usize> {
        self.read_rows(usize::MAX)
    }

    /// Read up to `max_rows` rows, appending them to the row buffer.
    ///
    /// On the first call only, the configured number of leading lines is
    /// discarded unconditionally (even empty ones, and even when
    /// `max_rows` is zero); skipped lines never count toward the returned
    /// total. Empty lines discarded by the `skip_empty_lines` policy do
    /// not count toward `max_rows` either. The call stops early when
    /// the stream is exhausted and returns the number of rows newly
    /// appended.
    ///
    /// # Errors
    ///
    /// [`Error::BadRowLength`] when a line's field count does not match
    /// the declared arity and `ignore_bad_row_length` is unset;
    /// [`Error::InvalidValue`] when a field cannot be converted. Either
    /// error aborts the call: nothing from the failing line (or any later
    /// line) is appended, while rows parsed earlier in the same call
    /// remain in the buffer.
    pub fn read_rows(&mut self, max_rows: usize) -> Result<usize> {
        self.skip_leading_lines();

        let mut produced = 0;
        while produced < max_rows {
            let Some(line) = self.next_line() else { break };

            if self.config.skip_empty_lines && line.is_empty() {
                trace!("skipping empty line");
                continue;
            }

            let arity = self.schema.arity();
            let mut fields = split_line(&line, &self.config, arity);
            if fields.len() != arity {
                if self.config.ignore_bad_row_length {
                    // short row: missing trailing fields read as empty
                    fields.resize(arity, String::new());
                } else {
                    let err = Error::BadRowLength {
                        expected: arity,
                        actual: fields.len(),
                    };
                    warn!(%err, "rejecting row");
                    return Err(err);
                }
            }

            let row = self.schema.parse_row(&fields).map_err(|err| {
                warn!(%err, "rejecting row");
                err
            })?;

            trace!(index = self.rows.len(), "row parsed");
            self.rows.push(row);
            produced += 1;
        }

        Ok(produced)
    }

    /// Drop the stream.
    ///
    /// Terminal: subsequent reads observe an unreadable stream and
    /// produce zero rows.
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            debug!("stream closed");
        }
    }

    fn skip_leading_lines(&mut self) {
        if !self.first_lines_skipped && self.config.skip_first_lines > 0 {
            debug!(count = self.config.skip_first_lines, "skipping leading lines");
            for _ in 0..self.config.skip_first_lines {
                if self.next_line().is_none() {
                    break;
                }
            }
        }
        self.first_lines_skipped = true;
    }

    /// Pull one line without its terminator. `None` once the stream is
    /// exhausted, unreadable, or absent.
    fn next_line(&mut self) -> Option<String> {
        let stream = self.stream.as_mut()?;
        let mut line = String::new();
        match stream.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(err) => {
                warn!(%err, "stream became unreadable");
                None
            }
        }
    }
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .field("open", &self.stream.is_some())
            .field("rows", &self.rows.len())
            .finish()
    }
}
