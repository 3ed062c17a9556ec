//! # Error Types
//!
//! Two families, both derived with `thiserror`:
//!
//! - [`ValidationError`]: a value tree violates a schema. One variant per
//!   violation kind, each carrying structured fields (parameter, path,
//!   offending value, bound or allow-list) rather than a pre-formatted
//!   message.
//! - [`DeclarationError`]: a JSON/YAML schema declaration cannot be turned
//!   into the [`Schema`](crate::Schema) data model.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::kind::ValueKind;
use crate::path::ParamPath;

/// First violation found while validating a value tree.
///
/// `param` is the offending parameter name; `path` is the location of the
/// mapping that holds it (empty at the top level). For list element errors
/// `param` names the list parameter and `index` the element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A key is not declared in the schema that applies at its level.
    #[error("unknown parameter \"{param}\"{}", within(.path))]
    UnknownParameter { param: String, path: ParamPath },

    /// A mandatory parameter is absent or null.
    #[error("missing mandatory parameter \"{param}\"{}", within(.path))]
    MissingMandatory { param: String, path: ParamPath },

    /// The runtime kind of a value differs from the declared kind.
    #[error("type error on \"{}\": wrong value ({value}), expecting {expected}", at(.path, .param))]
    TypeMismatch {
        param: String,
        path: ParamPath,
        value: Value,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A list has the wrong number of elements.
    #[error("size error on \"{}\": {size} elements, {violation}", at(.path, .param))]
    ListSizeViolation {
        param: String,
        path: ParamPath,
        size: usize,
        violation: SizeViolation,
    },

    /// A list element has the wrong kind (or is not a mapping when the
    /// list's content is a nested schema).
    #[error(
        "type error on \"{}[{index}]\": wrong element ({element}), expecting list of {expected}",
        at(.path, .param)
    )]
    ListElementTypeMismatch {
        param: String,
        path: ParamPath,
        index: usize,
        element: Value,
        expected: ValueKind,
    },

    /// A numeric value lies outside its inclusive bounds.
    #[error("value error on \"{}\": wrong value ({value}), {side} {bound}", at(.path, .param))]
    NumericRangeViolation {
        param: String,
        path: ParamPath,
        value: Number,
        bound: Number,
        side: RangeSide,
    },

    /// A value is missing from the allow-list or present in the deny-list.
    #[error("value error on \"{}\": wrong value ({value}), {reason}", at(.path, .param))]
    ValueNotAllowed {
        param: String,
        path: ParamPath,
        value: Value,
        reason: NotAllowedReason,
    },
}

impl ValidationError {
    /// Fieldless discriminant, convenient for matching and reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownParameter { .. } => ErrorKind::UnknownParameter,
            Self::MissingMandatory { .. } => ErrorKind::MissingMandatory,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::ListSizeViolation { .. } => ErrorKind::ListSizeViolation,
            Self::ListElementTypeMismatch { .. } => ErrorKind::ListElementTypeMismatch,
            Self::NumericRangeViolation { .. } => ErrorKind::NumericRangeViolation,
            Self::ValueNotAllowed { .. } => ErrorKind::ValueNotAllowed,
        }
    }

    /// The offending parameter name.
    pub fn param(&self) -> &str {
        match self {
            Self::UnknownParameter { param, .. }
            | Self::MissingMandatory { param, .. }
            | Self::TypeMismatch { param, .. }
            | Self::ListSizeViolation { param, .. }
            | Self::ListElementTypeMismatch { param, .. }
            | Self::NumericRangeViolation { param, .. }
            | Self::ValueNotAllowed { param, .. } => param,
        }
    }

    /// Location of the mapping that holds the offending parameter.
    pub fn path(&self) -> &ParamPath {
        match self {
            Self::UnknownParameter { path, .. }
            | Self::MissingMandatory { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::ListSizeViolation { path, .. }
            | Self::ListElementTypeMismatch { path, .. }
            | Self::NumericRangeViolation { path, .. }
            | Self::ValueNotAllowed { path, .. } => path,
        }
    }

    /// Full dotted location of the offending parameter (`path.param`).
    pub fn location(&self) -> ParamPath {
        self.path().child(self.param())
    }
}

/// Discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UnknownParameter,
    MissingMandatory,
    TypeMismatch,
    ListSizeViolation,
    ListElementTypeMismatch,
    NumericRangeViolation,
    ValueNotAllowed,
}

/// Which list-size constraint failed, with the declared count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeViolation {
    /// `size` declared and the count differs.
    NotEqual(usize),
    /// Count below `minsize`.
    BelowMin(usize),
    /// Count above `maxsize`.
    OverMax(usize),
}

impl fmt::Display for SizeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEqual(n) => write!(f, "not equal to {n}"),
            Self::BelowMin(n) => write!(f, "below min size of {n}"),
            Self::OverMax(n) => write!(f, "over max size of {n}"),
        }
    }
}

/// Which numeric bound was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    Min,
    Max,
}

impl fmt::Display for RangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("expecting greater or equal to"),
            Self::Max => f.write_str("expecting lower or equal to"),
        }
    }
}

/// Why a value was rejected by membership checks.
#[derive(Debug, Clone, PartialEq)]
pub enum NotAllowedReason {
    /// Not a member of the declared allow-list (enumerated here).
    NotInAllowList(Vec<Value>),
    /// Member of the declared deny-list.
    Forbidden,
}

impl fmt::Display for NotAllowedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInAllowList(allowed) => {
                f.write_str("expecting one of [")?;
                for (i, v) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Self::Forbidden => f.write_str("value is forbidden"),
        }
    }
}

fn within(path: &ParamPath) -> String {
    if path.is_root() {
        String::new()
    } else {
        format!(" in \"{path}\"")
    }
}

fn at(path: &ParamPath, param: &str) -> ParamPath {
    path.child(param)
}

/// A schema declaration that cannot be turned into a [`Schema`](crate::Schema).
///
/// `path` is the dotted location of the rule inside the declaration
/// (`lists.query`), empty for the top-level object.
#[derive(Error, Debug)]
pub enum DeclarationError {
    /// A schema or rule declaration is not an object.
    #[error("declaration at \"{path}\" must be an object, found {found}")]
    NotAnObject { path: String, found: &'static str },

    /// A rule has no `type` field.
    #[error("rule \"{path}\" has no \"type\"")]
    MissingType { path: String },

    /// A rule declares a type name outside the supported set.
    #[error("rule \"{path}\" declares unknown type {name}")]
    UnknownType { path: String, name: String },

    /// A recognized rule field has the wrong shape.
    #[error("rule \"{path}\": field \"{field}\" {reason}")]
    InvalidField {
        path: String,
        field: &'static str,
        reason: String,
    },

    /// The declaration text is not valid JSON.
    #[error("invalid JSON declaration: {0}")]
    Json(#[from] serde_json::Error),

    /// The declaration text is not valid YAML.
    #[error("invalid YAML declaration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML document uses constructs with no JSON equivalent.
    #[error("unsupported YAML declaration: {0}")]
    UnsupportedYaml(String),
}
