//! Validation of a whole source text.
//!
//! Every line is classified once. Malformed lines are collected and dropped,
//! the survivors are folded into an ordered mapping, and the first repeated key
//! switches to a full duplicate scan. A mapping is only returned when nothing
//! was found.

use log::debug;

use crate::{
    duplicates::find_duplicates,
    error::Error,
    extract::extract,
    grammar::{LineKind, classify},
    types::{Entries, MalformedLine, RawLine, ValidationReport, ValidationResult},
};

/// Outcome of folding well-formed lines into a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Complete(Entries),
    /// The first key seen twice, at the line of its second occurrence.
    DuplicateDetected { key: String, line_number: usize },
}

/// Validates `text` and returns either the clean mapping or every finding.
///
/// Empty input, or input with only blank lines, is clean.
pub fn validate(text: &str) -> Result<ValidationResult, Error> {
    let lines = RawLine::split(text);

    let mut malformed = Vec::new();
    let mut surviving = Vec::new();
    for line in &lines {
        match classify(&line.text) {
            LineKind::Blank => {}
            LineKind::Malformed => malformed.push(MalformedLine {
                line_number: line.number,
                text: line.text.clone(),
            }),
            LineKind::WellFormed => surviving.push(line.clone()),
        }
    }

    let duplicates = match build_entries(&surviving)? {
        BuildOutcome::Complete(entries) if malformed.is_empty() => {
            debug!(
                "validated {} lines: {} entries, no errors",
                lines.len(),
                entries.len()
            );
            return Ok(ValidationResult::Clean { entries });
        }
        BuildOutcome::Complete(_) => Vec::new(),
        BuildOutcome::DuplicateDetected { key, line_number } => {
            debug!("key `{}` repeated at line {}, scanning for duplicates", key, line_number);
            find_duplicates(&surviving, &malformed)?
        }
    };

    debug!(
        "validated {} lines: {} malformed, {} duplicate keys",
        lines.len(),
        malformed.len(),
        duplicates.len()
    );
    Ok(ValidationResult::Invalid(ValidationReport {
        malformed,
        duplicates,
    }))
}

/// Folds well-formed lines into an ordered mapping, stopping at the first
/// repeated key.
pub fn build_entries(lines: &[RawLine]) -> Result<BuildOutcome, Error> {
    let mut entries = Entries::new();
    for line in lines {
        let entry = extract(line)?;
        if let Err(key) = entries.insert_new(entry.key, entry.value) {
            return Ok(BuildOutcome::DuplicateDetected {
                key,
                line_number: entry.source_line,
            });
        }
    }
    Ok(BuildOutcome::Complete(entries))
}
