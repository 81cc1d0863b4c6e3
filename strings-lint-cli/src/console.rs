//! Console rendering of validation results.

use log::{error, info};
use strings_lint::{DuplicateKey, Entries, MalformedLine, Reporter, ValidationResult};

pub const RULE: &str =
    "------------------------------------------------------------------------";

/// Prints the tool title and a separator rule.
pub fn print_banner() {
    println!("strings tool");
    println!("{}", RULE);
}

/// Prints a section heading followed by a blank line.
pub fn print_heading(title: &str) {
    println!("{}", title);
    println!();
}

/// Logs findings through `log`; headings and verdicts go to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn malformed(&mut self, line: &MalformedLine) {
        info!("{}", line);
    }

    fn duplicate(&mut self, duplicate: &DuplicateKey) {
        info!("{}", duplicate);
    }

    fn success(&mut self, entries: &Entries) {
        println!();
        println!("NO ERRORS ({} strings)", entries.len());
        println!("{}", RULE);
    }

    fn report(&mut self, result: &ValidationResult) {
        let report = match result {
            ValidationResult::Clean { entries } => return self.success(entries),
            ValidationResult::Invalid(report) => report,
        };

        println!();
        println!("ERROR(S) LOCATED");
        if !report.malformed.is_empty() {
            error!("One or more lines is formatted incorrectly.");
            for line in &report.malformed {
                self.malformed(line);
            }
        }
        if !report.duplicates.is_empty() {
            error!("One or more duplicate keys exists.");
            for duplicate in &report.duplicates {
                self.duplicate(duplicate);
            }
        }
        println!("{}", RULE);
    }
}
