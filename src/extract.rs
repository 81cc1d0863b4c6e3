//! Key/value extraction from declaration lines.

use crate::{
    error::Error,
    types::{Entry, RawLine},
};

/// Splits a well-formed line into an [`Entry`].
///
/// The line is cut at its first `=`. Both halves are trimmed and lose every `"`;
/// the value also loses its terminating `;`. Grammar is not re-checked here.
pub fn extract(line: &RawLine) -> Result<Entry, Error> {
    let (key, value) = split_key_value(&line.text)
        .ok_or_else(|| Error::extraction(line.number, line.text.clone()))?;

    Ok(Entry {
        key,
        value,
        source_line: line.number,
    })
}

fn split_key_value(text: &str) -> Option<(String, String)> {
    let (key, value) = text.split_once('=')?;

    let key = key.trim().replace('"', "");
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value).replace('"', "");

    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_pair() {
        let entry = extract(&RawLine::new(3, r#""hello" = "world";"#)).unwrap();
        assert_eq!(entry.key, "hello");
        assert_eq!(entry.value, "world");
        assert_eq!(entry.source_line, 3);
    }

    #[test]
    fn test_extract_trims_leading_whitespace() {
        let entry = extract(&RawLine::new(1, r#"    "indented" = "value here";"#)).unwrap();
        assert_eq!(entry.key, "indented");
        assert_eq!(entry.value, "value here");
    }

    #[test]
    fn test_extract_splits_at_first_equals() {
        let entry = extract(&RawLine::new(1, r#""math" = "1 + 1 = 2";"#)).unwrap();
        assert_eq!(entry.key, "math");
        assert_eq!(entry.value, "1 + 1 = 2");
    }

    #[test]
    fn test_extract_removes_inner_quotes() {
        let entry = extract(&RawLine::new(1, r#""quote" = "say "hi" now";"#)).unwrap();
        assert_eq!(entry.value, "say hi now");
    }

    #[test]
    fn test_extract_without_separator_fails() {
        let result = extract(&RawLine::new(9, r#""hello" "world";"#));
        match result {
            Err(Error::Extraction { line_number, text }) => {
                assert_eq!(line_number, 9);
                assert_eq!(text, r#""hello" "world";"#);
            }
            other => panic!("expected extraction error, got {:?}", other),
        }
    }
}
