//! All error types for the strings-lint crate.
//!
//! Malformed lines and duplicate keys are not errors here: they are data in a
//! [`ValidationResult`](crate::types::ValidationResult). These variants cover
//! failures that end an operation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    /// A line accepted by the grammar could not be split into key and value.
    #[error("extraction failed at line {line_number}: no `=` separator in `{text}`")]
    Extraction { line_number: usize, text: String },
}

impl Error {
    pub fn extraction(line_number: usize, text: impl Into<String>) -> Self {
        Error::Extraction {
            line_number,
            text: text.into(),
        }
    }
}
