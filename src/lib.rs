#![forbid(unsafe_code)]
//! Lint and convert `"key" = "value";` localization sources.
//!
//! Every line of a source file must be a declaration of the form
//! `"lower_snake_key" = "Value";` or blank. Validation reports each malformed
//! line and every key declared more than once, with line numbers; a clean
//! source becomes an Android `strings.xml` document.
//!
//! # Quick Start
//!
//! ```rust
//! use strings_lint::{ValidationResult, validate};
//!
//! let result = validate("\"hello\" = \"world\";\n")?;
//! match result {
//!     ValidationResult::Clean { entries } => assert_eq!(entries.get("hello"), Some("world")),
//!     ValidationResult::Invalid(report) => panic!("unexpected errors: {:?}", report),
//! }
//! # Ok::<(), strings_lint::Error>(())
//! ```
//!
//! Writing the document for a whole file:
//!
//! ```rust,no_run
//! use strings_lint::{FormatOutcome, report::SilentReporter, tool::format_file};
//!
//! match format_file("copy", "copy_doc.txt", "res/values", &mut SilentReporter)? {
//!     FormatOutcome::Written { path, .. } => println!("wrote {}", path.display()),
//!     FormatOutcome::Rejected(report) => eprintln!("{} errors", report.len()),
//!     FormatOutcome::NothingToWrite => eprintln!("no declarations"),
//! }
//! # Ok::<(), strings_lint::Error>(())
//! ```

pub mod duplicates;
pub mod error;
pub mod extract;
pub mod formats;
pub mod grammar;
pub mod report;
pub mod tool;
pub mod traits;
pub mod types;
pub mod validator;

// Re-export most used types for easy consumption
pub use crate::{
    duplicates::find_duplicates,
    error::Error,
    extract::extract,
    grammar::{LineKind, classify},
    report::Reporter,
    tool::{FormatOutcome, OUTPUT_FILE_NAME, check_file, format_file},
    types::{
        DuplicateKey, Entries, Entry, MalformedLine, Occurrence, RawLine, ValidationError,
        ValidationReport, ValidationResult,
    },
    validator::validate,
};
