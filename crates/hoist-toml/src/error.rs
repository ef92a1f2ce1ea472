//! Error types for TOML to Hoist conversion.

use hoist_fmt::FormatError;
use thiserror::Error;

/// Errors that can occur when converting a TOML document to Hoist.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum TomlToHoistError {
    /// TOML parse error.
    #[error("TOML parse error: {message}")]
    Parse { message: String },

    /// TOML date-times have no Hoist representation.
    #[error("date-time values are not supported (key '{key}')")]
    Datetime { key: String },

    /// The parsed tree could not be rendered.
    #[error(transparent)]
    Format(#[from] FormatError),
}
