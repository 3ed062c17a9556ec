//! # Schemas & Declarations
//!
//! A [`Schema`] is an ordered mapping from parameter name to [`Rule`].
//! Rules keep their declaration order, which is the order the validator
//! walks them for the mandatory check.
//!
//! ## Declaration Format
//!
//! A declaration is a JSON or YAML object whose keys are parameter names
//! and whose values are rule objects:
//!
//! ```yaml
//! database_path:
//!   type: string
//!   mandatory: true
//!   label: Path to the database
//!   ui: DirPicker          # unrecognized: kept in Rule::extra
//! lists:
//!   type: mapping
//!   content:               # every entry of `lists` follows this schema
//!     query: { type: string, mandatory: true }
//!     kind:  { type: string, values: [smart, static] }
//! ```
//!
//! With this declaration `lists` may hold any number of named entries, such
//! as `{"All": {"query": "*"}, "MCU": {"query": "1542", "kind": "static"}}`.
//!
//! Recognized rule keys: `type`, `mandatory`, `default`, `values`,
//! `forbidden_values`, `label`, `content`, `size`, `minsize`, `maxsize`,
//! `min`, `max`. A `null` value for any optional key means "not declared".
//! Every other key is preserved verbatim.
//!
//! Declarations are not meta-validated. Only shapes that cannot be mapped
//! onto the data model (a non-object rule, an unknown `type`, a `size`
//! that is not a count, ...) are rejected.

use std::collections::HashMap;

use serde_json::{Map, Number, Value};

use crate::error::DeclarationError;
use crate::kind::{json_type_name, ValueKind};
use crate::path::ParamPath;
use crate::rule::{Content, Rule};

/// Ordered mapping from parameter name to [`Rule`] at one nesting level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    rules: Vec<(String, Rule)>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// An empty schema. Any non-empty mapping fails against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace, keeping its position) the rule for `name`.
    pub fn with_rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.rules[i].1 = rule,
            None => {
                self.index.insert(name.clone(), self.rules.len());
                self.rules.push((name, rule));
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&i| &self.rules[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    /// Mandatory rules in declaration order.
    pub fn mandatory(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.iter().filter(|(_, rule)| rule.mandatory)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Build a schema from a parsed declaration object.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] naming the dotted rule path when the
    /// declaration cannot be mapped onto the data model.
    pub fn from_value(declaration: &Value) -> Result<Self, DeclarationError> {
        parse_schema(declaration, &ParamPath::root())
    }

    /// Parse a JSON declaration document.
    pub fn from_json_str(text: &str) -> Result<Self, DeclarationError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Parse a YAML declaration document.
    ///
    /// The YAML tree is converted to the JSON value model first: tags are
    /// dropped and non-string mapping keys are stringified.
    pub fn from_yaml_str(text: &str) -> Result<Self, DeclarationError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        let value = yaml_to_json_value(&yaml).map_err(DeclarationError::UnsupportedYaml)?;
        Self::from_value(&value)
    }
}

const RECOGNIZED_KEYS: &[&str] = &[
    "type",
    "mandatory",
    "default",
    "values",
    "forbidden_values",
    "label",
    "content",
    "size",
    "minsize",
    "maxsize",
    "min",
    "max",
];

fn parse_schema(declaration: &Value, path: &ParamPath) -> Result<Schema, DeclarationError> {
    let object = declaration
        .as_object()
        .ok_or_else(|| DeclarationError::NotAnObject {
            path: path.to_string(),
            found: json_type_name(declaration),
        })?;

    let mut schema = Schema::new();
    for (name, rule) in object {
        let rule = parse_rule(rule, &path.child(name))?;
        schema = schema.with_rule(name.clone(), rule);
    }
    Ok(schema)
}

fn parse_rule(declaration: &Value, path: &ParamPath) -> Result<Rule, DeclarationError> {
    let object = declaration
        .as_object()
        .ok_or_else(|| DeclarationError::NotAnObject {
            path: path.to_string(),
            found: json_type_name(declaration),
        })?;

    let kind = match object.get("type") {
        None | Some(Value::Null) => {
            return Err(DeclarationError::MissingType {
                path: path.to_string(),
            })
        }
        Some(name) => name
            .as_str()
            .and_then(ValueKind::from_name)
            .ok_or_else(|| DeclarationError::UnknownType {
                path: path.to_string(),
                name: name.to_string(),
            })?,
    };

    let mut rule = Rule::new(kind);
    for (key, value) in object {
        if !RECOGNIZED_KEYS.contains(&key.as_str()) {
            rule.extra.insert(key.clone(), value.clone());
            continue;
        }
        if value.is_null() {
            continue;
        }
        match key.as_str() {
            "mandatory" => {
                rule.mandatory = value
                    .as_bool()
                    .ok_or_else(|| invalid(path, "mandatory", "must be a boolean"))?;
            }
            "default" => rule.default = Some(value.clone()),
            "values" => rule.values = Some(value_list(value, path, "values")?),
            "forbidden_values" => {
                rule.forbidden_values = Some(value_list(value, path, "forbidden_values")?);
            }
            "label" => {
                rule.label = Some(
                    value
                        .as_str()
                        .ok_or_else(|| invalid(path, "label", "must be a string"))?
                        .to_string(),
                );
            }
            "content" => rule.content = Some(parse_content(value, kind, path)?),
            "size" => rule.size = Some(count(value, path, "size")?),
            "minsize" => rule.min_size = Some(count(value, path, "minsize")?),
            "maxsize" => rule.max_size = Some(count(value, path, "maxsize")?),
            "min" => rule.min = Some(bound(value, path, "min")?),
            "max" => rule.max = Some(bound(value, path, "max")?),
            _ => {}
        }
    }
    Ok(rule)
}

fn parse_content(
    value: &Value,
    kind: ValueKind,
    path: &ParamPath,
) -> Result<Content, DeclarationError> {
    match value {
        Value::String(name) if kind == ValueKind::Mapping => Err(invalid(
            path,
            "content",
            &format!("must be a schema object on a mapping rule, found type name \"{name}\""),
        )),
        Value::String(name) => ValueKind::from_name(name)
            .map(Content::Kind)
            .ok_or_else(|| DeclarationError::UnknownType {
                path: path.child("content").to_string(),
                name: value.to_string(),
            }),
        Value::Object(_) => Ok(Content::Schema(parse_schema(value, path)?)),
        other => Err(invalid(
            path,
            "content",
            &format!("must be a type name or a schema object, found {}", json_type_name(other)),
        )),
    }
}

fn value_list(
    value: &Value,
    path: &ParamPath,
    field: &'static str,
) -> Result<Vec<Value>, DeclarationError> {
    value
        .as_array()
        .cloned()
        .ok_or_else(|| invalid(path, field, "must be an array"))
}

fn count(value: &Value, path: &ParamPath, field: &'static str) -> Result<usize, DeclarationError> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| invalid(path, field, "must be a non-negative integer"))
}

fn bound(value: &Value, path: &ParamPath, field: &'static str) -> Result<Number, DeclarationError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        _ => Err(invalid(path, field, "must be a number")),
    }
}

fn invalid(path: &ParamPath, field: &'static str, reason: &str) -> DeclarationError {
    DeclarationError::InvalidField {
        path: path.to_string(),
        field,
        reason: reason.to_string(),
    }
}

/// Convert a YAML declaration into the JSON value model.
///
/// Only the JSON-compatible subset of YAML is meaningful in a declaration:
/// tags are dropped and the tagged value kept. Rule and parameter names are
/// JSON object keys, so a scalar YAML key is used through its text form
/// (`2024:` declares parameter `"2024"`, `true:` parameter `"true"`).
/// serde_yaml keeps mapping order, so declaration order survives.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(yaml_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(
            items
                .iter()
                .map(yaml_to_json_value)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut object = Map::with_capacity(map.len());
            for (key, value) in map {
                object.insert(yaml_key(key)?, yaml_to_json_value(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

/// Integers stay integers (signed first, then unsigned); everything else
/// must be a finite float.
fn yaml_number(n: &serde_yaml::Number) -> Result<Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn yaml_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("mapping key {other:?} is not a scalar")),
    }
}
