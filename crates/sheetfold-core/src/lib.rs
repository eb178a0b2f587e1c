//! # Sheetfold Core
//!
//! Core types and utilities shared by the Sheetfold crates.
//! Provides the error taxonomy, editor-wide constants, and parsing of
//! the raw text the host reads from its numeric input fields.

pub mod constants;
pub mod error;
pub mod input;
pub mod types;

pub use error::{Error, ExportError, PreviewError, Result, ValidationError};
pub use input::{parse_field, BendDirection};
pub use types::Shared;
