//! # Store Errors
//!
//! Validation failures keep their structured [`ValidationError`]; unknown
//! parameter names given to the accessors are reported through the same
//! `UnknownParameter` variant (with an empty path), so there is a single
//! kind to match on.

use std::path::PathBuf;

use flexconf_schema::{ErrorKind, ValidationError};
use thiserror::Error;

/// Error returned by [`ConfigStore`](crate::ConfigStore) operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resulting tree violates the schema, or the parameter is unknown.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document is not valid JSON.
    #[error("invalid configuration document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document parsed, but its top-level value is not an object.
    #[error("configuration document must be a JSON object, found {found}")]
    NotAMapping { found: &'static str },

    /// Reading or writing a configuration file failed.
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `save_file` was called on a store that never loaded or saved a file.
    #[error("no configuration file to save to")]
    NoSourcePath,

    /// The tree could not be serialized.
    #[error("cannot serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ConfigError {
    /// Kind of the inner validation error, if this is one.
    pub fn validation_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Validation(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// The inner validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
