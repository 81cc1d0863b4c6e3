//! Core types for strings-lint.
//! The validator produces these; the serializer and reporters consume them.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

/// One line of the source text.
///
/// `number` is 1-based and counts every line of the input, blank ones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

impl RawLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Splits `text` on `\n` and numbers the lines from 1.
    ///
    /// A trailing `\r` is dropped with the newline. A final empty segment after
    /// a terminating newline is not a line.
    pub fn split(text: &str) -> Vec<RawLine> {
        if text.is_empty() {
            return Vec::new();
        }
        text.strip_suffix('\n')
            .unwrap_or(text)
            .split('\n')
            .enumerate()
            .map(|(index, line)| RawLine::new(index + 1, line.strip_suffix('\r').unwrap_or(line)))
            .collect()
    }
}

/// A key/value pair taken from a well-formed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub source_line: usize,
}

/// Ordered key → value mapping. Iteration order is the order keys were first
/// seen in the source file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Entries(IndexMap<String, String>);

/// Equal only when both hold the same pairs in the same order.
impl PartialEq for Entries {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Entries {}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair unless the key is already present.
    ///
    /// A repeated key leaves the mapping untouched and is handed back as `Err`.
    pub(crate) fn insert_new(&mut self, key: String, value: String) -> Result<(), String> {
        match self.0.entry(key) {
            indexmap::map::Entry::Occupied(occupied) => Err(occupied.key().clone()),
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(value);
                Ok(())
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Later pairs with an already-present key are ignored.
impl FromIterator<(String, String)> for Entries {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (key, value) in iter {
            let _ = entries.insert_new(key, value);
        }
        entries
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A line that failed the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line_number: usize,
    pub text: String,
}

impl Display for MalformedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Line {}]: {}", self.line_number, self.text)
    }
}

/// Where a duplicated key was seen and what value it carried there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub line_number: usize,
    pub value: String,
}

impl Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Line: {}}}, {}", self.line_number, self.value)
    }
}

/// A key declared on two or more well-formed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub key: String,
    /// Every occurrence in ascending line order. Always at least two.
    pub occurrences: Vec<Occurrence>,
}

impl Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Key: [{}] - Value Instances: {}",
            self.key,
            self.occurrences
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    MalformedLine(MalformedLine),
    DuplicateKey(DuplicateKey),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MalformedLine(line) => write!(f, "{}", line),
            ValidationError::DuplicateKey(duplicate) => write!(f, "{}", duplicate),
        }
    }
}

/// Every finding of a failed validation, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub malformed: Vec<MalformedLine>,
    pub duplicates: Vec<DuplicateKey>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.malformed.is_empty() && self.duplicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.malformed.len() + self.duplicates.len()
    }

    /// Findings flattened into one list, malformed lines first.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.malformed
            .iter()
            .cloned()
            .map(ValidationError::MalformedLine)
            .chain(
                self.duplicates
                    .iter()
                    .cloned()
                    .map(ValidationError::DuplicateKey),
            )
            .collect()
    }
}

/// Verdict of a validation pass. Exactly one form is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Clean { entries: Entries },
    Invalid(ValidationReport),
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        matches!(self, ValidationResult::Clean { .. })
    }

    pub fn entries(&self) -> Option<&Entries> {
        match self {
            ValidationResult::Clean { entries } => Some(entries),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ValidationResult::Clean { .. } => None,
            ValidationResult::Invalid(report) => Some(report),
        }
    }
}
