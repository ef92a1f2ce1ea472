/// Identifier type and parser.
pub mod identifier;

/// A type-safe data-type of the Hoist data-model.
pub mod value;
