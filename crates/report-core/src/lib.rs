//! Core domain layer for the expense report analyzer.
//!
//! Holds the data contracts shared by the parsing pipeline and the CLI:
//! transaction and report types, operation-type classification, the error
//! taxonomy, display formatting and command-line settings.

pub mod classify;
pub mod columns;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{ReportError, Result};
