use indexmap::IndexMap;
use thisisplural::Plural;

/// A parsed configuration tree.
///
/// Keys are plain strings: validity is checked during rendering so that an
/// offending key can be reported by the renderer, not at construction time.
/// `Array` can be carried by a front-end, but Hoist has no sequence syntax,
/// so the renderer rejects it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Array(Array),
    Map(Map),
}

impl Value {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::I64(_) => "integer",
            Value::F64(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Plural, Default)]
pub struct Array(pub Vec<Value>);

/// Key-ordered mapping. Iteration follows insertion order, which is what
/// keeps rendering deterministic.
#[derive(Debug, Clone, PartialEq, Plural, Default)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct Map(pub IndexMap<String, Value>);

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}
