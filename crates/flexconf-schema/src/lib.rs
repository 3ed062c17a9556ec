//! # flexconf-schema: Rule Schemas & Validation
//!
//! Declarative validation contracts for hierarchical JSON configuration.
//! A [`Schema`] maps parameter names to [`Rule`]s; a rule may point at a
//! nested schema through its `content`, so schemas nest to arbitrary depth.
//!
//! ## Validation (`validate`)
//!
//! The [`validate`] module walks a value tree depth-first, in key order,
//! and stops at the first violation. Every [`ValidationError`] carries the
//! offending parameter name and the dotted [`ParamPath`] of the mapping
//! that holds it, so callers can match on kind and data instead of parsing
//! messages.
//!
//! ## Declarations (`schema`)
//!
//! Schemas are either built in code ([`Rule::new`] plus chained setters)
//! or parsed from a JSON or YAML declaration:
//!
//! ```
//! use flexconf_schema::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({
//!     "name": { "type": "string", "mandatory": true, "label": "Display name" },
//!     "retries": { "type": "integer", "min": 0, "max": 10, "default": 3 }
//! }))
//! .unwrap();
//!
//! let tree = json!({ "name": "All" });
//! Validator::new(&schema).validate(tree.as_object().unwrap()).unwrap();
//! ```
//!
//! ## Crate Policy
//!
//! - No coercion: `1` is an integer, `1.0` is a float, and neither satisfies
//!   the other's declared kind.
//! - Unrecognized declaration keys are kept verbatim in [`Rule::extra`] and
//!   never interpreted.
//! - The schema itself is not meta-validated; only structural problems that
//!   prevent building the data model are reported as [`DeclarationError`].

pub mod error;
pub mod kind;
pub mod path;
pub mod rule;
pub mod schema;
pub mod validate;

pub use error::{
    DeclarationError, ErrorKind, NotAllowedReason, RangeSide, SizeViolation, ValidationError,
};
pub use kind::{json_type_name, ValueKind};
pub use path::ParamPath;
pub use rule::{Content, Rule};
pub use schema::Schema;
pub use validate::{validate_tree, Validator};

/// A configuration mapping node: parameter name to value, in document order.
pub type ConfigTree = serde_json::Map<String, serde_json::Value>;
