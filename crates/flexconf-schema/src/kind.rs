//! # Value Kinds
//!
//! The closed set of type tags a rule can declare, and the mapping from a
//! runtime JSON value to its tag. Matching is exact: there is no widening
//! from integer to float and no truthy/falsy normalization.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared or runtime type tag of a configuration value.
///
/// Declarations accept the canonical lowercase name plus a few aliases
/// (`str`, `bool`, `int`, `array`, `dict`, `object`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[serde(alias = "str")]
    String,
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "int")]
    Integer,
    Float,
    #[serde(alias = "array")]
    List,
    #[serde(alias = "dict", alias = "object")]
    Mapping,
    /// Opaque tag. No JSON value has this runtime kind, so a rule declared
    /// `any` only ever holds `null`.
    Any,
}

impl ValueKind {
    /// Runtime kind of `value`, or `None` for `null`.
    ///
    /// Numbers stored as integers (`i64`/`u64`) are [`ValueKind::Integer`];
    /// numbers stored as floats are [`ValueKind::Float`], even when the
    /// float has no fractional part (`1.0`).
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(n) if n.is_f64() => Some(Self::Float),
            Value::Number(_) => Some(Self::Integer),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::List),
            Value::Object(_) => Some(Self::Mapping),
        }
    }

    /// Whether a value of runtime kind `actual` satisfies this declared kind.
    pub fn accepts(self, actual: ValueKind) -> bool {
        self == actual
    }

    /// Parse a declaration name (`"string"`, `"int"`, `"dict"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        serde_json::from_value(Value::String(name.to_string())).ok()
    }

    /// Canonical declaration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::List => "list",
            Self::Mapping => "mapping",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type name of a value (`"null"`, `"number"`, `"object"`, ...), for
/// diagnostics about documents that are not yet typed against a schema.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
