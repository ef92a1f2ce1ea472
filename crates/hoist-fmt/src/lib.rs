//! Rendering of value trees as Hoist source.
//!
//! Every scalar in the tree becomes a named constant declared ahead of the
//! nested block body and referenced from it with `@[name]`. Constant names
//! are the chain of ancestor keys joined with underscores.
//!
//! # Example
//!
//! ```
//! use hoist_value::value::{Map, Value};
//!
//! let tree = Value::Map(Map::from_iter([(
//!     "port".to_string(),
//!     Value::I64(8080),
//! )]));
//!
//! let output = hoist_fmt::format_tree(&tree).unwrap();
//! assert_eq!(output, "const port = 8080\n\n{\n    port : @[port];\n}");
//! ```

mod error;

pub use error::FormatError;

use hoist_value::identifier::Identifier;
use hoist_value::value::{Map, Value};
use indexmap::IndexMap;

const INDENT: &str = "    ";

/// Render a value tree to Hoist source.
///
/// The root must be a map. The returned string carries no trailing newline.
///
/// Two representation choices are part of the Hoist format and preserved
/// here: booleans become the quoted string constants `"true"` / `"false"`,
/// and string literals are wrapped in double quotes without any escaping,
/// so a value containing `"` is emitted verbatim.
pub fn format_tree(tree: &Value) -> Result<String, FormatError> {
    let Value::Map(map) = tree else {
        return Err(FormatError::TopLevelNotMap);
    };
    let mut formatter = Formatter::new();
    formatter.format_root(map)?;
    Ok(formatter.finish())
}

/// One instance per `format_tree` call; never reused across conversions.
struct Formatter {
    constants: IndexMap<String, String>,
    lines: Vec<String>,
    indent_level: usize,
    path: Vec<Identifier>,
}

impl Formatter {
    fn new() -> Self {
        Self {
            constants: IndexMap::new(),
            lines: Vec::new(),
            indent_level: 0,
            path: Vec::new(),
        }
    }

    /// Declarations in discovery order, a blank separator, then the body.
    /// The declaration section is omitted entirely when nothing was hoisted.
    fn finish(self) -> String {
        let body = self.lines.join("\n");
        if self.constants.is_empty() {
            return body;
        }
        let declarations: Vec<String> = self
            .constants
            .iter()
            .map(|(name, literal)| format!("const {name} = {literal}"))
            .collect();
        format!("{}\n\n{body}", declarations.join("\n"))
    }

    fn format_root(&mut self, map: &Map) -> Result<(), FormatError> {
        // The outermost block closes with a bare `}`, nested blocks with `};`.
        self.lines.push("{".to_string());
        self.indent_level += 1;
        self.format_map(map)?;
        self.indent_level -= 1;
        self.lines.push("}".to_string());
        Ok(())
    }

    fn format_map(&mut self, map: &Map) -> Result<(), FormatError> {
        for (key, value) in &map.0 {
            let ident: Identifier = key.parse().map_err(|e: hoist_value::identifier::IdentifierError| FormatError::InvalidKey {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            match value {
                Value::Map(child) => {
                    self.push_line(format!("{ident} : {{"));
                    self.indent_level += 1;
                    self.path.push(ident);
                    self.format_map(child)?;
                    self.path.pop();
                    self.indent_level -= 1;
                    self.push_line("};".to_string());
                }
                Value::Bool(b) => {
                    let literal = if *b { r#""true""# } else { r#""false""# };
                    self.bind_constant(&ident, literal.to_string())?;
                }
                Value::I64(n) => self.bind_constant(&ident, n.to_string())?,
                Value::F64(n) => self.bind_constant(&ident, n.to_string())?,
                Value::String(s) => self.bind_constant(&ident, format!("\"{s}\""))?,
                Value::Array(_) => {
                    return Err(FormatError::UnsupportedValue {
                        key: key.clone(),
                        kind: value.kind().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Synthesize the constant name for `key` under the current path, store
    /// the formatted literal and emit the referencing body line.
    fn bind_constant(&mut self, key: &Identifier, literal: String) -> Result<(), FormatError> {
        let name = self.constant_name(key);
        if self.constants.contains_key(&name) {
            return Err(FormatError::DuplicateConstant { name });
        }
        self.push_line(format!("{key} : @[{name}];"));
        self.constants.insert(name, literal);
        Ok(())
    }

    fn constant_name(&self, key: &Identifier) -> String {
        let mut segments: Vec<&str> = self.path.iter().map(|segment| segment.as_ref()).collect();
        segments.push(key.as_ref());
        segments.join("_")
    }

    fn push_line(&mut self, line: String) {
        self.lines
            .push(format!("{}{line}", INDENT.repeat(self.indent_level)));
    }
}
