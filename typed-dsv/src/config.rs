//! Reader configuration: delimiter characters and line policies

/// Tokenizer and read-loop configuration.
///
/// Every setting can be changed at any time through `Reader::config_mut`.
/// `skip_first_lines` is latched: it is applied exactly once, before the
/// first read, and changes made after that point have no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Field separator character
    pub separator: char,
    /// Quote character; separators between two quotes are literal text
    pub quote: char,
    /// Escape character; the character following it is copied literally.
    ///
    /// The default is `'\n'`, which can never occur inside a line, so
    /// escaping is unreachable until a caller overrides it (typically with
    /// `'\\'`).
    pub escape: char,
    /// Suppress arity errors: excess fields are discarded and short rows
    /// are read as if padded with empty fields
    pub ignore_bad_row_length: bool,
    /// Discard empty lines instead of parsing them
    pub skip_empty_lines: bool,
    /// Number of leading lines to discard, applied once before the first
    /// read
    pub skip_first_lines: usize,
}

impl ReaderConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator character
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the escape character
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Tolerate rows whose field count does not match the declared arity
    pub fn with_ignore_bad_row_length(mut self, ignore: bool) -> Self {
        self.ignore_bad_row_length = ignore;
        self
    }

    /// Control whether empty lines are discarded
    pub fn with_skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }

    /// Set the number of leading lines to discard before the first read
    pub fn with_skip_first_lines(mut self, count: usize) -> Self {
        self.skip_first_lines = count;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            separator: ';',
            quote: '"',
            escape: '\n',
            ignore_bad_row_length: false,
            skip_empty_lines: true,
            skip_first_lines: 0,
        }
    }
}
