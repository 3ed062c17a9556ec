//! # Input Files
//!
//! Resolves the schema and configuration paths given on the command line
//! and opens a store over them. Schema files ending in `.yaml` or `.yml`
//! are read as YAML, anything else as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexconf_schema::Schema;
use flexconf_store::ConfigStore;

/// Schema and configuration file locations for one invocation.
#[derive(Debug, Clone)]
pub struct Sources {
    pub schema: PathBuf,
    pub config: PathBuf,
}

impl Sources {
    /// Build from the optional global flags, failing if either is absent.
    pub fn from_flags(schema: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            schema: schema.context("missing --schema <FILE>")?,
            config: config.context("missing --config <FILE>")?,
        })
    }

    /// A store bound to the schema, with nothing loaded yet.
    pub fn open_store(&self) -> Result<ConfigStore> {
        let schema = load_schema(&self.schema)?;
        tracing::debug!(
            schema = %self.schema.display(),
            parameters = schema.len(),
            "schema loaded"
        );
        Ok(ConfigStore::new(schema))
    }

    /// A store with the configuration file loaded and validated.
    pub fn load_store(&self) -> Result<ConfigStore> {
        let mut store = self.open_store()?;
        store
            .load_file(&self.config)
            .with_context(|| format!("cannot load {}", self.config.display()))?;
        Ok(store)
    }
}

/// Read a schema declaration, choosing the format from the file extension.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read schema {}", path.display()))?;
    let schema = if is_yaml(path) {
        Schema::from_yaml_str(&text)
    } else {
        Schema::from_json_str(&text)
    };
    schema.with_context(|| format!("invalid schema {}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
