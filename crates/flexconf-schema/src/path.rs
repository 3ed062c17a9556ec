//! # Parameter Paths
//!
//! Dotted locations inside a value tree, used in diagnostics. The root is
//! the empty path; mapping children join with `.` and list elements append
//! `[index]`, e.g. `servers[2].tls.cert`.
//!
//! Paths are values threaded through the recursive validator as an
//! explicit accumulator. Extending a path returns a new path and leaves
//! the parent untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a mapping node within a value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamPath(String);

impl ParamPath {
    /// The top-level (empty) path.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Whether this is the top-level path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the child `key` under this path: `key` at the root,
    /// `self.key` otherwise.
    pub fn child(&self, key: &str) -> Self {
        if self.is_root() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of element `index` of the list at this path.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
