//! Presentation seam between validation and whatever shows the results.

use crate::types::{DuplicateKey, Entries, MalformedLine, ValidationResult};

/// Receives validation findings. The CLI renders them to the console; tests
/// and library users can collect them.
pub trait Reporter {
    fn malformed(&mut self, line: &MalformedLine);

    fn duplicate(&mut self, duplicate: &DuplicateKey);

    fn success(&mut self, entries: &Entries);

    /// Dispatches every finding of `result`, malformed lines first.
    fn report(&mut self, result: &ValidationResult) {
        match result {
            ValidationResult::Clean { entries } => self.success(entries),
            ValidationResult::Invalid(report) => {
                for line in &report.malformed {
                    self.malformed(line);
                }
                for duplicate in &report.duplicates {
                    self.duplicate(duplicate);
                }
            }
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn malformed(&mut self, _line: &MalformedLine) {}

    fn duplicate(&mut self, _duplicate: &DuplicateKey) {}

    fn success(&mut self, _entries: &Entries) {}
}

/// Keeps every finding as a display line, in the order received.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub lines: Vec<String>,
    pub succeeded: bool,
}

impl Reporter for CollectingReporter {
    fn malformed(&mut self, line: &MalformedLine) {
        self.lines.push(line.to_string());
    }

    fn duplicate(&mut self, duplicate: &DuplicateKey) {
        self.lines.push(duplicate.to_string());
    }

    fn success(&mut self, _entries: &Entries) {
        self.succeeded = true;
    }
}
