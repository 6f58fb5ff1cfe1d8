//! Character-level field splitting for one line of delimited text

use crate::config::ReaderConfig;

/// Split one line (without its terminator) into field substrings.
///
/// The line is scanned character by character. The character after an
/// escape is copied literally and the escape itself is consumed. An
/// unescaped quote toggles quoted mode and is dropped from the output;
/// separators inside quoted mode are literal text. A field closes at every
/// unescaped, unquoted separator, and the final field always closes at the
/// end of the line.
///
/// When `config.ignore_bad_row_length` is set and all `arity` declared
/// fields have been collected, scanning stops and the remainder of the
/// line is discarded. Otherwise every field found is returned, so the
/// caller can check the count against the declared arity.
///
/// Unterminated quotes and a trailing escape are absorbed silently; they
/// are never an error.
///
/// # Examples
///
/// ```
/// use typed_dsv::{ReaderConfig, split_line};
///
/// let config = ReaderConfig::default();
/// assert_eq!(split_line("1;2;3", &config, 3), vec!["1", "2", "3"]);
/// assert_eq!(split_line("\"a;b\";c", &config, 2), vec!["a;b", "c"]);
/// ```
pub fn split_line(line: &str, config: &ReaderConfig, arity: usize) -> Vec<String> {
    let mut fields: Vec<String> = Vec::with_capacity(arity);
    let mut current = String::new();
    let mut escaped = false;
    let mut quoted = false;

    for ch in line.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        if ch == config.escape {
            escaped = true;
            continue;
        }
        if ch == config.quote {
            quoted = !quoted;
            continue;
        }
        if ch == config.separator && !quoted {
            if config.ignore_bad_row_length && fields.len() == arity {
                // declared columns are full; the rest of the line is dropped
                return fields;
            }
            fields.push(std::mem::take(&mut current));
            continue;
        }
        current.push(ch);
    }

    if config.ignore_bad_row_length && fields.len() == arity {
        return fields;
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReaderConfig {
        ReaderConfig::default().with_escape('\\')
    }

    #[test]
    fn test_plain_split() {
        assert_eq!(split_line("1;2;3", &config(), 3), vec!["1", "2", "3"]);
        assert_eq!(split_line("a", &config(), 1), vec!["a"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(split_line(";;", &config(), 3), vec!["", "", ""]);
        assert_eq!(split_line("a;;c", &config(), 3), vec!["a", "", "c"]);
        assert_eq!(split_line("", &config(), 1), vec![""]);
    }

    #[test]
    fn test_trailing_separator_opens_empty_field() {
        assert_eq!(split_line("1;2;", &config(), 3), vec!["1", "2", ""]);
    }

    #[test]
    fn test_quoted_separator_is_literal() {
        assert_eq!(
            split_line("\"a;b\";c", &config(), 2),
            vec!["a;b", "c"]
        );
        assert_eq!(
            split_line("x\"y;z\"w;c", &config(), 2),
            vec!["xy;zw", "c"]
        );
    }

    #[test]
    fn test_delimiter_quotes_dropped() {
        assert_eq!(split_line("\"abc\"", &config(), 1), vec!["abc"]);
    }

    #[test]
    fn test_escaped_separator_is_literal() {
        assert_eq!(split_line("a\\;b;c", &config(), 2), vec!["a;b", "c"]);
    }

    #[test]
    fn test_escaped_quote_is_literal() {
        assert_eq!(split_line("\\\"a;b", &config(), 2), vec!["\"a", "b"]);
    }

    #[test]
    fn test_escaped_escape_is_literal() {
        assert_eq!(split_line("a\\\\b", &config(), 1), vec!["a\\b"]);
    }

    #[test]
    fn test_unterminated_quote_absorbed() {
        assert_eq!(split_line("\"a;b", &config(), 1), vec!["a;b"]);
    }

    #[test]
    fn test_trailing_escape_absorbed() {
        assert_eq!(split_line("ab\\", &config(), 1), vec!["ab"]);
    }

    #[test]
    fn test_excess_fields_returned_for_count_check() {
        assert_eq!(
            split_line("1;2;3;4", &config(), 3),
            vec!["1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_tolerant_truncation_stops_scanning() {
        let config = config().with_ignore_bad_row_length(true);
        assert_eq!(split_line("1;2;3;4;5", &config, 3), vec!["1", "2", "3"]);
        assert_eq!(split_line("1;2;3;4", &config, 3), vec!["1", "2", "3"]);
        // an unterminated quote past the declared columns is never reached
        assert_eq!(split_line("1;2;3;\"4", &config, 3), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_short_line_kept_short() {
        let config = config().with_ignore_bad_row_length(true);
        assert_eq!(split_line("1;2", &config, 3), vec!["1", "2"]);
    }

    #[test]
    fn test_newline_escape_default_disables_escaping() {
        // with the default escape ('\n') a backslash is ordinary text
        let config = ReaderConfig::default();
        assert_eq!(split_line("a\\;b", &config, 2), vec!["a\\", "b"]);
    }

    #[test]
    fn test_alternate_separator() {
        let config = config().with_separator(',');
        assert_eq!(split_line("1,2;3", &config, 2), vec!["1", "2;3"]);
    }
}
