//! # Validation
//!
//! Recursive, first-failure validation of a value tree against a
//! [`Schema`].
//!
//! ## Algorithm
//!
//! For each mapping node, in order:
//!
//! 1. every mandatory rule (declaration order) must have a non-null entry;
//! 2. every key of the node must be declared in the schema;
//! 3. every non-null entry (key order) is checked against its rule:
//!    exact kind, then the branch for its runtime kind (list size and
//!    content, per-entry mapping schema, numeric bounds), then the allow-list
//!    and deny-list.
//!
//! Nested schemas recurse with an extended [`ParamPath`]: `parent.key.entry`
//! for each entry of a mapping, `parent.key[i]` for a list element. The walk aborts at the
//! first violation; errors are never aggregated.
//!
//! Validation is a pure function of its inputs. Validating the same tree
//! twice gives the same answer, and a valid tree stays valid whatever the
//! order of its keys.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::error::{NotAllowedReason, RangeSide, SizeViolation, ValidationError};
use crate::kind::ValueKind;
use crate::path::ParamPath;
use crate::rule::{Content, Rule};
use crate::schema::Schema;
use crate::ConfigTree;

/// Validates whole value trees against one root schema.
///
/// Holds only a shared borrow of the schema, so it is cheap to build and
/// `Send + Sync`.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'s> {
    schema: &'s Schema,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Validate `tree` from the root.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] met during a depth-first,
    /// key-order traversal.
    pub fn validate(&self, tree: &ConfigTree) -> Result<(), ValidationError> {
        validate_tree(tree, self.schema, &ParamPath::root())
    }
}

/// Validate the mapping `node`, located at `path`, against `schema`.
pub fn validate_tree(
    node: &ConfigTree,
    schema: &Schema,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    for (param, _) in schema.mandatory() {
        if node.get(param).map_or(true, Value::is_null) {
            return Err(ValidationError::MissingMandatory {
                param: param.to_string(),
                path: path.clone(),
            });
        }
    }

    for param in node.keys() {
        if !schema.contains(param) {
            return Err(unknown(param, path));
        }
    }

    for (param, value) in node {
        if value.is_null() {
            continue;
        }
        let rule = schema.get(param).ok_or_else(|| unknown(param, path))?;
        check_value(param, value, rule, path)?;
    }

    Ok(())
}

fn unknown(param: &str, path: &ParamPath) -> ValidationError {
    ValidationError::UnknownParameter {
        param: param.to_string(),
        path: path.clone(),
    }
}

fn check_value(
    param: &str,
    value: &Value,
    rule: &Rule,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    let Some(actual) = ValueKind::of(value) else {
        return Ok(());
    };
    if !rule.kind.accepts(actual) {
        return Err(ValidationError::TypeMismatch {
            param: param.to_string(),
            path: path.clone(),
            value: value.clone(),
            expected: rule.kind,
            actual,
        });
    }

    match value {
        Value::Array(items) => check_list(param, items, rule, path)?,
        Value::Object(entries) => check_mapping(param, entries, rule, path)?,
        Value::Number(n) => check_range(param, n, rule, path)?,
        _ => {}
    }

    check_membership(param, value, rule, path)
}

fn check_list(
    param: &str,
    items: &[Value],
    rule: &Rule,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    let size = items.len();
    let violation = match (rule.size, rule.min_size, rule.max_size) {
        (Some(exact), _, _) if size != exact => Some(SizeViolation::NotEqual(exact)),
        (Some(_), _, _) => None,
        (None, Some(min), _) if size < min => Some(SizeViolation::BelowMin(min)),
        (None, _, Some(max)) if size > max => Some(SizeViolation::OverMax(max)),
        _ => None,
    };
    if let Some(violation) = violation {
        return Err(ValidationError::ListSizeViolation {
            param: param.to_string(),
            path: path.clone(),
            size,
            violation,
        });
    }

    match &rule.content {
        Some(Content::Kind(expected)) => {
            for (index, element) in items.iter().enumerate() {
                let matches = ValueKind::of(element).is_some_and(|k| expected.accepts(k));
                if !matches {
                    return Err(element_mismatch(param, path, index, element, *expected));
                }
            }
        }
        Some(Content::Schema(schema)) => {
            let list_path = path.child(param);
            for (index, element) in items.iter().enumerate() {
                match element {
                    Value::Object(entries) => {
                        validate_tree(entries, schema, &list_path.index(index))?;
                    }
                    other => {
                        return Err(element_mismatch(
                            param,
                            path,
                            index,
                            other,
                            ValueKind::Mapping,
                        ))
                    }
                }
            }
        }
        None => {}
    }

    Ok(())
}

/// Each entry of a mapping with a `content` schema is itself a mapping
/// validated against that schema, at `parent.param.entry`. Null entries
/// count as absent.
fn check_mapping(
    param: &str,
    entries: &ConfigTree,
    rule: &Rule,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    let Some(schema) = rule.nested_schema() else {
        return Ok(());
    };
    let mapping_path = path.child(param);
    for (name, entry) in entries {
        let Some(actual) = ValueKind::of(entry) else {
            continue;
        };
        let Value::Object(fields) = entry else {
            return Err(ValidationError::TypeMismatch {
                param: name.clone(),
                path: mapping_path,
                value: entry.clone(),
                expected: ValueKind::Mapping,
                actual,
            });
        };
        validate_tree(fields, schema, &mapping_path.child(name))?;
    }
    Ok(())
}

fn element_mismatch(
    param: &str,
    path: &ParamPath,
    index: usize,
    element: &Value,
    expected: ValueKind,
) -> ValidationError {
    ValidationError::ListElementTypeMismatch {
        param: param.to_string(),
        path: path.clone(),
        index,
        element: element.clone(),
        expected,
    }
}

fn check_range(
    param: &str,
    value: &Number,
    rule: &Rule,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    let violated = |bound: &Number, side: RangeSide| ValidationError::NumericRangeViolation {
        param: param.to_string(),
        path: path.clone(),
        value: value.clone(),
        bound: bound.clone(),
        side,
    };

    if let Some(min) = &rule.min {
        if compare_numbers(value, min) == Some(Ordering::Less) {
            return Err(violated(min, RangeSide::Min));
        }
    }
    if let Some(max) = &rule.max {
        if compare_numbers(value, max) == Some(Ordering::Greater) {
            return Err(violated(max, RangeSide::Max));
        }
    }
    Ok(())
}

/// Numeric ordering across integer and float representations.
///
/// Two integers compare exactly (including `u64` values above `i64::MAX`);
/// anything involving a float compares as `f64`. Bounds are comparisons,
/// not type checks, so an integer bound on a float rule is fine.
fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    fn as_i128(n: &Number) -> Option<i128> {
        n.as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
    }

    match (as_i128(a), as_i128(b)) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

fn check_membership(
    param: &str,
    value: &Value,
    rule: &Rule,
    path: &ParamPath,
) -> Result<(), ValidationError> {
    if let Some(allowed) = &rule.values {
        if !allowed.contains(value) {
            return Err(ValidationError::ValueNotAllowed {
                param: param.to_string(),
                path: path.clone(),
                value: value.clone(),
                reason: NotAllowedReason::NotInAllowList(allowed.clone()),
            });
        }
    }
    if let Some(forbidden) = &rule.forbidden_values {
        if forbidden.contains(value) {
            return Err(ValidationError::ValueNotAllowed {
                param: param.to_string(),
                path: path.clone(),
                value: value.clone(),
                reason: NotAllowedReason::Forbidden,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn tree(value: Value) -> ConfigTree {
        match value {
            Value::Object(map) => map,
            other => panic!("test tree must be an object, got {other}"),
        }
    }

    fn check(schema: &Schema, value: Value) -> Result<(), ValidationError> {
        Validator::new(schema).validate(&tree(value))
    }

    fn name_schema() -> Schema {
        Schema::new().with_rule("name", Rule::new(ValueKind::String).mandatory())
    }

    fn media_schema() -> Schema {
        Schema::from_value(&json!({
            "database_path": { "type": "string", "mandatory": true },
            "lists": {
                "type": "mapping",
                "content": {
                    "query": { "type": "string", "mandatory": true },
                    "type": { "type": "string", "mandatory": true, "values": ["smart", "static"] }
                }
            },
            "ui_language": { "type": "string", "default": "en", "values": ["en", "fr"] }
        }))
        .unwrap()
    }

    // ── Mandatory and name checks ───────────────────────────────────

    #[test]
    fn test_mandatory_present_validates() {
        check(&name_schema(), json!({ "name": "All" })).unwrap();
    }

    #[test]
    fn test_mandatory_missing() {
        let err = check(&name_schema(), json!({})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingMandatory {
                param: "name".into(),
                path: ParamPath::root(),
            }
        );
    }

    #[test]
    fn test_mandatory_null_counts_as_missing() {
        let err = check(&name_schema(), json!({ "name": null })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatory);
        assert_eq!(err.param(), "name");
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = check(&name_schema(), json!({ "name": "All", "extra": 1 })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownParameter {
                param: "extra".into(),
                path: ParamPath::root(),
            }
        );
    }

    #[test]
    fn test_mandatory_check_runs_before_name_check() {
        let err = check(&name_schema(), json!({ "extra": 1 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMandatory);
    }

    #[test]
    fn test_name_check_runs_before_value_checks() {
        let schema = Schema::new().with_rule("n", Rule::new(ValueKind::Integer));
        let err = check(&schema, json!({ "n": "wrong", "extra": 1 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownParameter);
    }

    #[test]
    fn test_null_optional_value_passes() {
        let schema = Schema::new().with_rule("n", Rule::new(ValueKind::Integer).min(0));
        check(&schema, json!({ "n": null })).unwrap();
    }

    #[test]
    fn test_first_failure_follows_key_order() {
        let schema = Schema::new()
            .with_rule("a", Rule::new(ValueKind::Integer))
            .with_rule("b", Rule::new(ValueKind::Integer));
        let err = check(&schema, json!({ "b": "x", "a": "y" })).unwrap_err();
        assert_eq!(err.param(), "b");
        let err = check(&schema, json!({ "a": "y", "b": "x" })).unwrap_err();
        assert_eq!(err.param(), "a");
    }

    // ── Type checks ─────────────────────────────────────────────────

    #[test]
    fn test_type_mismatch_reports_value_and_kinds() {
        let schema = Schema::new().with_rule("port", Rule::new(ValueKind::Integer));
        let err = check(&schema, json!({ "port": "80" })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                param: "port".into(),
                path: ParamPath::root(),
                value: json!("80"),
                expected: ValueKind::Integer,
                actual: ValueKind::String,
            }
        );
    }

    #[test]
    fn test_no_numeric_widening() {
        let float_rule = Schema::new().with_rule("x", Rule::new(ValueKind::Float));
        let err = check(&float_rule, json!({ "x": 1 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let int_rule = Schema::new().with_rule("x", Rule::new(ValueKind::Integer));
        let err = check(&int_rule, json!({ "x": 1.0 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_no_truthy_normalization() {
        let schema = Schema::new().with_rule("flag", Rule::new(ValueKind::Boolean));
        assert!(check(&schema, json!({ "flag": 1 })).is_err());
        assert!(check(&schema, json!({ "flag": "true" })).is_err());
        check(&schema, json!({ "flag": false })).unwrap();
    }

    #[test]
    fn test_any_kind_rejects_every_value() {
        let schema = Schema::new().with_rule("blob", Rule::new(ValueKind::Any));
        for value in [json!(1), json!("s"), json!([1, "a"]), json!({ "k": 2.5 })] {
            let err = check(&schema, json!({ "blob": value })).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::TypeMismatch { expected: ValueKind::Any, .. }
            ));
        }
        check(&schema, json!({ "blob": null })).unwrap();
        check(&schema, json!({})).unwrap();
    }

    // ── Numeric bounds ──────────────────────────────────────────────

    #[test]
    fn test_integer_range() {
        let schema = Schema::new().with_rule("n", Rule::new(ValueKind::Integer).min(0).max(10));
        check(&schema, json!({ "n": 5 })).unwrap();
        check(&schema, json!({ "n": 0 })).unwrap();
        check(&schema, json!({ "n": 10 })).unwrap();

        let err = check(&schema, json!({ "n": 11 })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NumericRangeViolation {
                param: "n".into(),
                path: ParamPath::root(),
                value: Number::from(11),
                bound: Number::from(10),
                side: RangeSide::Max,
            }
        );

        let err = check(&schema, json!({ "n": -1 })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NumericRangeViolation { side: RangeSide::Min, ref bound, .. }
                if *bound == Number::from(0)
        ));
    }

    #[test]
    fn test_float_value_with_integer_bounds() {
        let schema = Schema::from_value(&json!({
            "ratio": { "type": "float", "min": 0, "max": 1 }
        }))
        .unwrap();
        check(&schema, json!({ "ratio": 0.5 })).unwrap();
        check(&schema, json!({ "ratio": 1.0 })).unwrap();
        let err = check(&schema, json!({ "ratio": 1.5 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericRangeViolation);
    }

    #[test]
    fn test_integer_value_with_float_bound() {
        let schema = Schema::from_value(&json!({
            "n": { "type": "integer", "max": 2.5 }
        }))
        .unwrap();
        check(&schema, json!({ "n": 2 })).unwrap();
        assert!(check(&schema, json!({ "n": 3 })).is_err());
    }

    #[test]
    fn test_large_unsigned_against_signed_bound() {
        let schema = Schema::new().with_rule("n", Rule::new(ValueKind::Integer).min(-5).max(10));
        let err = check(&schema, json!({ "n": u64::MAX })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericRangeViolation);
    }

    // ── Lists ───────────────────────────────────────────────────────

    fn tags_schema() -> Schema {
        Schema::new().with_rule(
            "tags",
            Rule::new(ValueKind::List).size(3).content_kind(ValueKind::Integer),
        )
    }

    #[test]
    fn test_list_exact_size() {
        let err = check(&tags_schema(), json!({ "tags": [1, 2] })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ListSizeViolation {
                param: "tags".into(),
                path: ParamPath::root(),
                size: 2,
                violation: SizeViolation::NotEqual(3),
            }
        );
    }

    #[test]
    fn test_list_element_kind() {
        let err = check(&tags_schema(), json!({ "tags": [1, 2, "x"] })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ListElementTypeMismatch {
                param: "tags".into(),
                path: ParamPath::root(),
                index: 2,
                element: json!("x"),
                expected: ValueKind::Integer,
            }
        );
        check(&tags_schema(), json!({ "tags": [1, 2, 3] })).unwrap();
    }

    #[test]
    fn test_list_null_element_rejected() {
        let schema = Schema::new().with_rule(
            "xs",
            Rule::new(ValueKind::List).content_kind(ValueKind::Integer),
        );
        check(&schema, json!({ "xs": [1, 2] })).unwrap();
        let err = check(&schema, json!({ "xs": [1, null] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ListElementTypeMismatch);
    }

    #[test]
    fn test_list_min_and_max_size() {
        let schema = Schema::new().with_rule(
            "xs",
            Rule::new(ValueKind::List).min_size(1).max_size(2),
        );
        check(&schema, json!({ "xs": [1] })).unwrap();
        check(&schema, json!({ "xs": [1, 2] })).unwrap();

        let err = check(&schema, json!({ "xs": [] })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ListSizeViolation { violation: SizeViolation::BelowMin(1), .. }
        ));
        let err = check(&schema, json!({ "xs": [1, 2, 3] })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ListSizeViolation { violation: SizeViolation::OverMax(2), size: 3, .. }
        ));
    }

    #[test]
    fn test_exact_size_wins_over_range() {
        let schema = Schema::new().with_rule(
            "xs",
            Rule::new(ValueKind::List).size(3).min_size(5).max_size(1),
        );
        check(&schema, json!({ "xs": [1, 2, 3] })).unwrap();
    }

    #[test]
    fn test_list_of_schemas_recurses_with_indexed_path() {
        let server = Schema::new()
            .with_rule("host", Rule::new(ValueKind::String).mandatory())
            .with_rule("port", Rule::new(ValueKind::Integer).min(1));
        let schema = Schema::new().with_rule(
            "servers",
            Rule::new(ValueKind::List).content_schema(server),
        );

        check(&schema, json!({ "servers": [{ "host": "a" }, { "host": "b", "port": 80 }] }))
            .unwrap();

        let err = check(&schema, json!({ "servers": [{ "host": "a" }, { "port": 80 }] }))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingMandatory {
                param: "host".into(),
                path: ParamPath::from("servers[1]"),
            }
        );

        let err = check(&schema, json!({ "servers": [{ "host": "a", "port": 0 }] }))
            .unwrap_err();
        assert_eq!(err.location().as_str(), "servers[0].port");
    }

    #[test]
    fn test_list_of_schemas_rejects_non_mapping_elements() {
        let schema = Schema::new().with_rule(
            "servers",
            Rule::new(ValueKind::List).content_schema(Schema::new()),
        );
        let err = check(&schema, json!({ "servers": [{}, 3] })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ListElementTypeMismatch {
                index: 1,
                expected: ValueKind::Mapping,
                ..
            }
        ));
    }

    // ── Mappings ────────────────────────────────────────────────────

    #[test]
    fn test_mapping_content_applies_to_every_entry() {
        check(
            &media_schema(),
            json!({
                "database_path": "./db",
                "lists": {
                    "All": { "query": "select *", "type": "smart" },
                    "SF, Fantasy": { "query": "genre in (sf, fantasy)", "type": "smart" },
                    "MCU": { "query": "1542", "type": "static" }
                }
            }),
        )
        .unwrap();
        check(&media_schema(), json!({ "database_path": "./db", "lists": {} })).unwrap();
    }

    #[test]
    fn test_mapping_entry_missing_mandatory_carries_path() {
        let err = check(
            &media_schema(),
            json!({
                "database_path": "./db",
                "lists": {
                    "All": { "query": "select *", "type": "smart" },
                    "MCU": { "query": "1542" }
                }
            }),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingMandatory {
                param: "type".into(),
                path: ParamPath::from("lists.MCU"),
            }
        );
        assert_eq!(err.location().as_str(), "lists.MCU.type");
    }

    #[test]
    fn test_mapping_entry_must_be_a_mapping() {
        let err = check(
            &media_schema(),
            json!({ "database_path": "./db", "lists": { "All": "select *" } }),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                param: "All".into(),
                path: ParamPath::from("lists"),
                value: json!("select *"),
                expected: ValueKind::Mapping,
                actual: ValueKind::String,
            }
        );

        check(&media_schema(), json!({ "database_path": "./db", "lists": { "All": null } }))
            .unwrap();
    }

    #[test]
    fn test_mapping_entry_keys_are_joined_verbatim() {
        let err = check(
            &media_schema(),
            json!({ "database_path": "./db", "lists": { "a.b": { "query": "q" } } }),
        )
        .unwrap_err();
        assert_eq!(err.param(), "type");
        assert_eq!(err.path().as_str(), "lists.a.b");
    }

    #[test]
    fn test_nested_unknown_and_not_allowed() {
        let err = check(
            &media_schema(),
            json!({
                "database_path": "./db",
                "lists": { "MCU": { "query": "1542", "type": "static", "sort": "asc" } }
            }),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownParameter);
        assert_eq!(err.param(), "sort");
        assert_eq!(err.path().as_str(), "lists.MCU");

        let err = check(
            &media_schema(),
            json!({
                "database_path": "./db",
                "lists": { "All": { "query": "1542", "type": "dynamic" } }
            }),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotAllowed);
        assert_eq!(err.location().as_str(), "lists.All.type");
    }

    #[test]
    fn test_mapping_without_content_is_opaque() {
        let schema = Schema::new().with_rule("meta", Rule::new(ValueKind::Mapping));
        check(&schema, json!({ "meta": { "anything": [1, { "x": null }] } })).unwrap();
    }

    // ── Allow / deny lists ──────────────────────────────────────────

    #[test]
    fn test_allow_list() {
        let err = check(&media_schema(), json!({ "database_path": "x", "ui_language": "de" }))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ValueNotAllowed {
                param: "ui_language".into(),
                path: ParamPath::root(),
                value: json!("de"),
                reason: NotAllowedReason::NotInAllowList(vec![json!("en"), json!("fr")]),
            }
        );
    }

    #[test]
    fn test_deny_list() {
        let schema = Schema::new().with_rule(
            "user",
            Rule::new(ValueKind::String).forbidden_values(["root", "admin"]),
        );
        check(&schema, json!({ "user": "alice" })).unwrap();
        let err = check(&schema, json!({ "user": "root" })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueNotAllowed { reason: NotAllowedReason::Forbidden, .. }
        ));
    }

    #[test]
    fn test_allow_and_deny_enforced_independently() {
        let schema = Schema::new().with_rule(
            "n",
            Rule::new(ValueKind::Integer).values([1, 2]).forbidden_values([2]),
        );
        check(&schema, json!({ "n": 1 })).unwrap();
        let err = check(&schema, json!({ "n": 2 })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueNotAllowed { reason: NotAllowedReason::Forbidden, .. }
        ));
        let err = check(&schema, json!({ "n": 3 })).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueNotAllowed { reason: NotAllowedReason::NotInAllowList(_), .. }
        ));
    }

    #[test]
    fn test_membership_applies_after_type_specific_checks() {
        let schema = Schema::from_value(&json!({
            "pair": { "type": "list", "content": "integer", "values": [[1, 2], [3, 4]] }
        }))
        .unwrap();
        check(&schema, json!({ "pair": [3, 4] })).unwrap();
        let err = check(&schema, json!({ "pair": [1, "x"] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ListElementTypeMismatch);
        let err = check(&schema, json!({ "pair": [5, 6] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotAllowed);
    }

    #[test]
    fn test_membership_is_exact() {
        let schema = Schema::from_value(&json!({
            "x": { "type": "list", "values": [[1]] }
        }))
        .unwrap();
        check(&schema, json!({ "x": [1] })).unwrap();
        let err = check(&schema, json!({ "x": [1.0] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueNotAllowed);
    }

    #[test]
    fn test_compare_numbers() {
        let n = |v: Value| match v {
            Value::Number(n) => n,
            _ => unreachable!(),
        };
        assert_eq!(compare_numbers(&n(json!(1)), &n(json!(2))), Some(Ordering::Less));
        assert_eq!(compare_numbers(&n(json!(2.0)), &n(json!(2))), Some(Ordering::Equal));
        assert_eq!(
            compare_numbers(&n(json!(u64::MAX)), &n(json!(-1))),
            Some(Ordering::Greater)
        );
    }
}
