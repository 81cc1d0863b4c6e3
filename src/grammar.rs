//! Line grammar for `"key" = "value";` declarations.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Quoted lowercase key, ` = `, quoted value of two or more characters with
    /// no surrounding whitespace, `;`.
    static ref DECLARATION_REGEX: Regex =
        Regex::new(r#"^\s*"[a-z0-9_]+" = "\S.*\S";$"#).unwrap();
}

const TERMINATOR: &str = "\";";

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    WellFormed,
    Blank,
    Malformed,
}

/// Classifies `line` (without its newline).
pub fn classify(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if is_well_formed(line) {
        LineKind::WellFormed
    } else {
        LineKind::Malformed
    }
}

/// True when `line` is a complete declaration with nothing after its first `";`.
///
/// Trailing whitespace counts as trailing content. Control characters other
/// than tab cannot appear in XML text, so a line carrying one is rejected.
pub fn is_well_formed(line: &str) -> bool {
    if line.chars().any(|c| c.is_control() && c != '\t') {
        return false;
    }
    match line.find(TERMINATOR) {
        Some(index) if index + TERMINATOR.len() == line.len() => DECLARATION_REGEX.is_match(line),
        _ => false,
    }
}
