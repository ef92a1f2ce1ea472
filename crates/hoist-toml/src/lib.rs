//! TOML conversion support for the Hoist format.
//!
//! This crate parses a TOML document and converts it to a Hoist value tree,
//! preserving table and key ordering.
//!
//! # Example
//!
//! ```
//! let toml = r#"
//! [server]
//! host = "localhost"
//! port = 8080
//! "#;
//!
//! let output = hoist_toml::toml_to_hoist(toml).unwrap();
//! assert!(output.starts_with("const server_host = \"localhost\""));
//! ```

mod error;

pub use error::TomlToHoistError;

use hoist_value::value::{Array, Map, Value};
use toml::Table;

/// Parse a TOML document and convert it to a Hoist value tree.
///
/// Arrays are carried through so the renderer can report them against their
/// key; date-times are rejected here because the tree cannot represent them.
pub fn to_tree(input: &str) -> Result<Value, TomlToHoistError> {
    let table: Table = toml::from_str(input).map_err(|e| TomlToHoistError::Parse {
        message: e.to_string(),
    })?;
    Ok(Value::Map(convert_table(&table)?))
}

/// Parse a TOML document and render it as Hoist source in one call.
pub fn toml_to_hoist(input: &str) -> Result<String, TomlToHoistError> {
    let tree = to_tree(input)?;
    Ok(hoist_fmt::format_tree(&tree)?)
}

fn convert_table(table: &Table) -> Result<Map, TomlToHoistError> {
    let mut map = Map::new();
    for (key, value) in table {
        map.0.insert(key.clone(), convert_value(key, value)?);
    }
    Ok(map)
}

fn convert_value(key: &str, value: &toml::Value) -> Result<Value, TomlToHoistError> {
    match value {
        toml::Value::String(s) => Ok(Value::String(s.clone())),
        toml::Value::Integer(i) => Ok(Value::I64(*i)),
        toml::Value::Float(f) => Ok(Value::F64(*f)),
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        toml::Value::Datetime(_) => Err(TomlToHoistError::Datetime {
            key: key.to_string(),
        }),
        toml::Value::Array(values) => {
            let mut items = Vec::with_capacity(values.len());
            for item in values {
                items.push(convert_value(key, item)?);
            }
            Ok(Value::Array(Array(items)))
        }
        toml::Value::Table(child) => Ok(Value::Map(convert_table(child)?)),
    }
}
