//! # Persistence
//!
//! JSON text and file helpers around [`ConfigStore`]. Loading parses a
//! document whose top-level value must be an object and hands it to
//! [`ConfigStore::load`]. Saving serializes the current tree with 4-space
//! indentation (key order preserved) and commits only once the text, or
//! the file, has been produced.
//!
//! The store remembers the last file it loaded from or saved to, so
//! [`ConfigStore::save_file`] can write back without repeating the path.

use std::fs;
use std::path::{Path, PathBuf};

use flexconf_schema::{json_type_name, ConfigTree};
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::store::ConfigStore;

impl ConfigStore {
    /// Parse `text` as a JSON object and load it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for invalid JSON, [`ConfigError::NotAMapping`]
    /// when the top-level value is not an object, or the validation error.
    pub fn load_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let tree = parse_document(text)?;
        self.load(tree)
    }

    /// Read, parse, and load the configuration file at `path`, then
    /// remember `path` for [`save_file`](Self::save_file).
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&text)?;
        self.source = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "configuration file loaded");
        Ok(())
    }

    /// Path of the last file loaded or saved.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Serialize the current tree and commit.
    pub fn save_to_string(&mut self) -> Result<String, ConfigError> {
        let text = render(self.whole_config())?;
        self.commit();
        Ok(text)
    }

    /// Write the current tree back to the remembered file and commit.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoSourcePath`] if no file was loaded or saved before.
    pub fn save_file(&mut self) -> Result<(), ConfigError> {
        let path = self.source.clone().ok_or(ConfigError::NoSourcePath)?;
        self.save_file_as(path)
    }

    /// Write the current tree to `path`, commit, and remember `path`.
    pub fn save_file_as(&mut self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        let text = render(self.whole_config())?;
        fs::write(&path, text).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        self.commit();
        tracing::info!(path = %path.display(), "configuration file saved");
        self.source = Some(path);
        Ok(())
    }
}

/// Parse a configuration document; its top-level value must be an object.
pub fn parse_document(text: &str) -> Result<ConfigTree, ConfigError> {
    let document: Value = serde_json::from_str(text).map_err(ConfigError::Parse)?;
    match document {
        Value::Object(tree) => Ok(tree),
        other => Err(ConfigError::NotAMapping {
            found: json_type_name(&other),
        }),
    }
}

/// Pretty-print a tree with 4-space indentation.
pub fn render(tree: &ConfigTree) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut serializer).map_err(ConfigError::Serialize)?;
    String::from_utf8(buf).map_err(|e| ConfigError::Serialize(serde_json::Error::custom(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexconf_schema::{ErrorKind, Schema};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::from_value(&json!({
            "name": { "type": "string", "mandatory": true },
            "lists": {
                "type": "mapping",
                "content": { "query": { "type": "string" } }
            },
            "n": { "type": "integer" }
        }))
        .unwrap()
    }

    #[test]
    fn test_load_str_valid() {
        let mut store = ConfigStore::new(schema());
        store.load_str(r#"{ "name": "All", "n": 2 }"#).unwrap();
        assert_eq!(store.parameter_value("n").unwrap(), &json!(2));
    }

    #[test]
    fn test_load_str_invalid_json() {
        let mut store = ConfigStore::new(schema());
        let err = store.load_str("{ name: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_str_requires_object() {
        let mut store = ConfigStore::new(schema());
        let err = store.load_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping { found: "array" }));
    }

    #[test]
    fn test_load_str_rejected_keeps_previous_tree() {
        let mut store = ConfigStore::new(schema());
        store.load_str(r#"{ "name": "All" }"#).unwrap();
        let err = store.load_str(r#"{ "name": "All", "x": 1 }"#).unwrap_err();
        assert_eq!(err.validation_kind(), Some(ErrorKind::UnknownParameter));
        assert_eq!(store.parameter_value("name").unwrap(), &json!("All"));
    }

    #[test]
    fn test_render_uses_four_space_indent_and_key_order() {
        let mut tree = ConfigTree::new();
        tree.insert("name".into(), json!("All"));
        tree.insert("lists".into(), json!({ "query": "q" }));
        let text = render(&tree).unwrap();
        assert_eq!(
            text,
            "{\n    \"name\": \"All\",\n    \"lists\": {\n        \"query\": \"q\"\n    }\n}"
        );
    }

    #[test]
    fn test_save_to_string_commits() {
        let mut store = ConfigStore::new(schema());
        store.load_str(r#"{ "name": "All" }"#).unwrap();
        store.set_parameter_value("n", json!(3)).unwrap();
        assert!(store.has_pending_changes());

        let text = store.save_to_string().unwrap();
        assert!(!store.has_pending_changes());

        let mut reloaded = ConfigStore::new(schema());
        reloaded.load_str(&text).unwrap();
        assert_eq!(reloaded.whole_config(), store.whole_config());
    }

    #[test]
    fn test_save_file_without_source() {
        let mut store = ConfigStore::new(schema());
        store.load_str(r#"{ "name": "All" }"#).unwrap();
        store.set_parameter_value("n", json!(3)).unwrap();
        let err = store.save_file().unwrap_err();
        assert!(matches!(err, ConfigError::NoSourcePath));
        assert!(store.has_pending_changes());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut store = ConfigStore::new(schema());
        let err = store
            .load_file("/nonexistent/flexconf/config.json")
            .unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/flexconf/config.json"));
            }
            other => panic!("Expected Io, got: {other}"),
        }
        assert!(store.source_path().is_none());
    }
}
