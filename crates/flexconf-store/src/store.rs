//! # Configuration Store
//!
//! Typed access to a schema-validated configuration tree, with
//! copy-validate-swap writes and a single-slot snapshot for discarding
//! uncommitted changes.

use std::path::PathBuf;
use std::sync::Arc;

use flexconf_schema::{ConfigTree, ParamPath, Rule, Schema, ValidationError, Validator};
use serde_json::Value;

use crate::error::ConfigError;

static NULL: Value = Value::Null;

/// Schema-bound configuration with transactional writes.
///
/// ## Invariants
///
/// - Once a tree has been loaded, `current` is valid against `schema`.
/// - `previous`, when held, is the tree as it was before the first write
///   since the last load, commit, or discard.
/// - A failed operation changes neither `current` nor `previous`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    schema: Arc<Schema>,
    current: ConfigTree,
    previous: Option<ConfigTree>,
    pub(crate) source: Option<PathBuf>,
}

impl ConfigStore {
    /// A store bound to `schema`, holding an empty, not yet validated tree.
    ///
    /// Load a configuration before writing single parameters: every write
    /// validates the whole tree, so mandatory parameters must be present.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
            current: ConfigTree::new(),
            previous: None,
            source: None,
        }
    }

    /// A store initialised with `tree`, validated from the root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `tree` violates the schema.
    pub fn with_config(
        schema: impl Into<Arc<Schema>>,
        tree: ConfigTree,
    ) -> Result<Self, ConfigError> {
        let mut store = Self::new(schema);
        store.set_whole_config(tree)?;
        Ok(store)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Shared handle to the schema, for binding further stores to it.
    pub fn shared_schema(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Read-only view of the current tree.
    pub fn whole_config(&self) -> &ConfigTree {
        &self.current
    }

    /// Whether a snapshot of an earlier tree is held.
    pub fn has_pending_changes(&self) -> bool {
        self.previous.is_some()
    }

    /// Replace the whole tree after validating it from the root.
    ///
    /// On success the snapshot is cleared. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in `tree`.
    pub fn set_whole_config(&mut self, tree: ConfigTree) -> Result<(), ConfigError> {
        Validator::new(&self.schema).validate(&tree)?;
        self.current = tree;
        self.previous = None;
        Ok(())
    }

    /// Load an already parsed tree. Same contract as
    /// [`set_whole_config`](Self::set_whole_config).
    pub fn load(&mut self, tree: ConfigTree) -> Result<(), ConfigError> {
        if let Err(e) = self.set_whole_config(tree) {
            tracing::warn!(error = %e, "rejected configuration");
            return Err(e);
        }
        tracing::debug!(parameters = self.current.len(), "configuration loaded");
        Ok(())
    }

    /// Effective value of the top-level parameter `name`.
    ///
    /// Returns the stored value when present and non-null, otherwise the
    /// rule's default, otherwise `null`. The result borrows from the store,
    /// so it cannot be used to mutate the tree or the schema default.
    ///
    /// # Errors
    ///
    /// `UnknownParameter` if `name` is not declared in the root schema.
    pub fn parameter_value(&self, name: &str) -> Result<&Value, ConfigError> {
        let rule = self.rule(name)?;
        Ok(match self.current.get(name) {
            Some(value) if !value.is_null() => value,
            _ => rule.default.as_ref().unwrap_or(&NULL),
        })
    }

    /// Label declared for the top-level parameter `name`, if any.
    ///
    /// # Errors
    ///
    /// `UnknownParameter` if `name` is not declared in the root schema.
    pub fn parameter_label(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        Ok(self.rule(name)?.label.as_deref())
    }

    /// Rebind the top-level parameter `name` to `value`.
    ///
    /// The whole resulting tree is validated before it replaces the current
    /// one. The tree being replaced becomes the snapshot unless one is
    /// already held. Setting `null` clears an optional parameter.
    ///
    /// # Errors
    ///
    /// `UnknownParameter` if `name` is not declared in the root schema, or
    /// the first [`ValidationError`] of the resulting tree. In both cases
    /// the store is left untouched.
    pub fn set_parameter_value(&mut self, name: &str, value: Value) -> Result<(), ConfigError> {
        self.rule(name)?;

        let mut candidate = self.current.clone();
        candidate.insert(name.to_string(), value);

        if let Err(e) = Validator::new(&self.schema).validate(&candidate) {
            tracing::warn!(param = %name, error = %e, "rejected parameter write");
            return Err(e.into());
        }

        let replaced = std::mem::replace(&mut self.current, candidate);
        if self.previous.is_none() {
            self.previous = Some(replaced);
        }
        tracing::debug!(param = %name, "parameter updated");
        Ok(())
    }

    /// Accept the current tree: drop the snapshot.
    pub fn commit(&mut self) {
        if self.previous.take().is_some() {
            tracing::debug!("pending changes committed");
        }
    }

    /// Restore the snapshot, if one is held. Otherwise a no-op.
    pub fn discard_changes(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.current = previous;
            tracing::debug!("pending changes discarded");
        }
    }

    fn rule(&self, name: &str) -> Result<&Rule, ConfigError> {
        self.schema.get(name).ok_or_else(|| {
            ConfigError::Validation(ValidationError::UnknownParameter {
                param: name.to_string(),
                path: ParamPath::root(),
            })
        })
    }
}
