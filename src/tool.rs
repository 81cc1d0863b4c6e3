//! File-level `check` and `format` operations.
//!
//! Both read `<source_dir>/<file_name>`; `format_file` additionally writes
//! `<dest_dir>/strings.xml` when validation is clean.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    error::Error,
    formats::AndroidStringsFormat,
    report::Reporter,
    traits::Parser,
    types::{Entries, ValidationReport, ValidationResult},
    validator::validate,
};

/// Name of the generated document inside the destination directory.
pub const OUTPUT_FILE_NAME: &str = "strings.xml";

/// Result of a `format_file` call that did not fail on I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Written { path: PathBuf, entries: Entries },
    /// Validation failed; nothing was written.
    Rejected(ValidationReport),
    /// The source is clean but declares nothing; nothing was written.
    NothingToWrite,
}

/// Reads a whole source file, decoding UTF-16 when a BOM says so.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;
    // The decoder may leave a UTF-8 BOM in place.
    if let Some(stripped) = decoded.strip_prefix('\u{feff}') {
        decoded = stripped.to_string();
    }
    Ok(decoded)
}

/// Validates `<source_dir>/<file_name>` and hands the findings to `reporter`.
pub fn check_file<P: AsRef<Path>>(
    source_dir: P,
    file_name: &str,
    reporter: &mut dyn Reporter,
) -> Result<ValidationResult, Error> {
    let path = source_dir.as_ref().join(file_name);
    debug!("checking {}", path.display());

    let result = validate(&read_source(&path)?)?;
    reporter.report(&result);
    Ok(result)
}

/// Validates the source and, when clean, writes `strings.xml` into `dest_dir`.
///
/// An existing `strings.xml` is replaced. On validation errors nothing is
/// written and the report is returned in [`FormatOutcome::Rejected`]. A source
/// with no declarations yields [`FormatOutcome::NothingToWrite`] and leaves the
/// destination untouched.
pub fn format_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    file_name: &str,
    dest_dir: Q,
    reporter: &mut dyn Reporter,
) -> Result<FormatOutcome, Error> {
    let entries = match check_file(source_dir, file_name, reporter)? {
        ValidationResult::Clean { entries } => entries,
        ValidationResult::Invalid(report) => {
            warn!(
                "not writing {}: {} validation errors",
                OUTPUT_FILE_NAME,
                report.len()
            );
            return Ok(FormatOutcome::Rejected(report));
        }
    };

    if entries.is_empty() {
        warn!("not writing {}: source has no declarations", OUTPUT_FILE_NAME);
        return Ok(FormatOutcome::NothingToWrite);
    }

    let path = dest_dir.as_ref().join(OUTPUT_FILE_NAME);
    AndroidStringsFormat::from(&entries).write_to(&path)?;
    info!("wrote {} entries to {}", entries.len(), path.display());

    Ok(FormatOutcome::Written { path, entries })
}
