//! # Rules
//!
//! A [`Rule`] is the validation contract of a single parameter. It is pure
//! data: the behavior lives in [`validate`](crate::validate).

use serde_json::{Map, Number, Value};

use crate::kind::ValueKind;
use crate::schema::Schema;

/// What the elements of a list (or the entries of a mapping) must be.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Every list element must have exactly this kind.
    Kind(ValueKind),
    /// Every list element, or every entry of a mapping, is a mapping
    /// validated against this nested schema.
    Schema(Schema),
}

/// Validation contract of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Declared kind (`type` in declarations).
    pub kind: ValueKind,
    /// Must be present and non-null.
    pub mandatory: bool,
    /// Substituted on read when the parameter is absent or null.
    pub default: Option<Value>,
    /// Allow-list: when set, the value must be a member.
    pub values: Option<Vec<Value>>,
    /// Deny-list: when set, the value must not be a member.
    pub forbidden_values: Option<Vec<Value>>,
    /// Display string, never validated.
    pub label: Option<String>,
    /// Element kind or nested schema, for lists and mappings.
    pub content: Option<Content>,
    /// Exact list length. Takes precedence over `min_size`/`max_size`.
    pub size: Option<usize>,
    /// Minimum list length (`minsize`).
    pub min_size: Option<usize>,
    /// Maximum list length (`maxsize`).
    pub max_size: Option<usize>,
    /// Inclusive lower bound for numeric values.
    pub min: Option<Number>,
    /// Inclusive upper bound for numeric values.
    pub max: Option<Number>,
    /// Unrecognized declaration keys, kept verbatim for downstream
    /// consumers (UI hints and the like). Never interpreted here.
    pub extra: Map<String, Value>,
}

impl Rule {
    /// A non-mandatory rule of the given kind with no other constraint.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            mandatory: false,
            default: None,
            values: None,
            forbidden_values: None,
            label: None,
            content: None,
            size: None,
            min_size: None,
            max_size: None,
            min: None,
            max: None,
            extra: Map::new(),
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn forbidden_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.forbidden_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// List elements must all be of `kind`.
    pub fn content_kind(mut self, kind: ValueKind) -> Self {
        self.content = Some(Content::Kind(kind));
        self
    }

    /// List elements, or the entries of a mapping, follow `schema`.
    pub fn content_schema(mut self, schema: Schema) -> Self {
        self.content = Some(Content::Schema(schema));
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn min_size(mut self, min: usize) -> Self {
        self.min_size = Some(min);
        self
    }

    pub fn max_size(mut self, max: usize) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn min(mut self, bound: impl Into<Number>) -> Self {
        self.min = Some(bound.into());
        self
    }

    pub fn max(mut self, bound: impl Into<Number>) -> Self {
        self.max = Some(bound.into());
        self
    }

    /// Attach an opaque passthrough field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The nested schema, if `content` declares one.
    pub fn nested_schema(&self) -> Option<&Schema> {
        match &self.content {
            Some(Content::Schema(schema)) => Some(schema),
            _ => None,
        }
    }
}
