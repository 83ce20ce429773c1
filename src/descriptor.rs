//! # Per-Directory Package Descriptor
//!
//! Each service directory (and the shared library) carries a `package.json`
//! describing its dependencies and named scripts. The tooling only cares
//! about a tiny slice of it: whether a `build` script is declared, and the
//! package name. Everything else is the package manager's business.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// The slice of a `package.json` the tooling reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Descriptor {
    /// Package name, if declared.
    #[serde(default)]
    pub name: Option<String>,
    /// Named scripts runnable via the package manager.
    #[serde(default)]
    scripts: serde_json::Map<String, Value>,
}

impl Descriptor {
    /// Read and parse a descriptor file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::DescriptorParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| Error::DescriptorParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether a script entry with the given name is declared.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}
