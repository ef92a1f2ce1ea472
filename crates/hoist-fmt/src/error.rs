//! Error types for rendering a value tree as Hoist source.

use thiserror::Error;

/// Errors that can occur when rendering a value tree to Hoist source.
///
/// Any of these aborts the whole conversion; no partial output is returned.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormatError {
    /// The root of the tree was not a mapping.
    #[error("top level must be a mapping")]
    TopLevelNotMap,

    /// A key is not a valid Hoist identifier.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// A value has no Hoist representation.
    #[error("unsupported value type {kind} for key '{key}'")]
    UnsupportedValue { key: String, kind: String },

    /// Two scalar leaves synthesized the same constant name.
    #[error("duplicate constant '{name}'")]
    DuplicateConstant { name: String },
}
