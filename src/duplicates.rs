//! Duplicate key detection over the lines that survived grammar checking.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
    error::Error,
    extract::extract,
    types::{DuplicateKey, MalformedLine, Occurrence, RawLine},
};

/// Finds every key declared more than once.
///
/// Blank lines and lines listed in `malformed` are ignored. Keys are reported in
/// order of first appearance, occurrences in ascending line order.
pub fn find_duplicates(
    lines: &[RawLine],
    malformed: &[MalformedLine],
) -> Result<Vec<DuplicateKey>, Error> {
    let skipped: HashSet<usize> = malformed.iter().map(|m| m.line_number).collect();
    let mut groups: IndexMap<String, Vec<Occurrence>> = IndexMap::new();

    for line in lines {
        if line.text.trim().is_empty() || skipped.contains(&line.number) {
            continue;
        }
        let entry = extract(line)?;
        groups.entry(entry.key).or_default().push(Occurrence {
            line_number: entry.source_line,
            value: entry.value,
        });
    }

    Ok(groups
        .into_iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(key, occurrences)| DuplicateKey { key, occurrences })
        .collect())
}
