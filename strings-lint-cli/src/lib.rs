//! CLI library for testing purposes

pub mod console;
pub mod error;

pub use console::ConsoleReporter;
pub use error::CliError;
