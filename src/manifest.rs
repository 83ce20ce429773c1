//! # Services Manifest
//!
//! The manifest is the `services` object embedded in the workspace root's
//! `package.json`. Keys are service names, values are source locators of the
//! form `location[#branch]`:
//!
//! ```json
//! {
//!   "services": {
//!     "auth": "https://github.com/micro-store/auth.git",
//!     "payments": "https://github.com/micro-store/payments.git#develop"
//!   }
//! }
//! ```
//!
//! The manifest drives the pull and prepare commands; entries are processed
//! strictly in the order they appear in the file. The update-shared command
//! does not consult the manifest at all (its target list is fixed, see
//! [`crate::workspace`]).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Branch checked out when a locator carries no `#branch` suffix.
pub const DEFAULT_BRANCH: &str = "main";

/// A parsed source locator: where to clone from and which branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSource {
    /// Clone location, typically a git URL.
    pub location: String,
    /// Branch to check out; defaults to [`DEFAULT_BRANCH`].
    pub branch: String,
}

impl ServiceSource {
    /// Parse a `location[#branch]` locator string.
    ///
    /// Everything before the first `#` is the location; everything after is
    /// the branch. A missing or empty branch falls back to
    /// [`DEFAULT_BRANCH`]. Parsing never fails: a locator is an opaque
    /// string handed to the version-control tool, which does its own
    /// validation.
    pub fn parse(locator: &str) -> Self {
        match locator.split_once('#') {
            Some((location, branch)) if !branch.is_empty() => Self {
                location: location.to_string(),
                branch: branch.to_string(),
            },
            Some((location, _)) => Self {
                location: location.to_string(),
                branch: DEFAULT_BRANCH.to_string(),
            },
            None => Self {
                location: locator.to_string(),
                branch: DEFAULT_BRANCH.to_string(),
            },
        }
    }
}

/// One manifest entry: a named service and its source.
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    pub name: String,
    pub source: ServiceSource,
}

/// The full set of services declared in the workspace root descriptor.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ServiceEntry>,
}

/// Shape of the root `package.json`, reduced to what the tooling needs.
#[derive(Debug, Deserialize)]
struct RootDescriptor {
    #[serde(default)]
    services: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from the workspace root's `package.json`.
    ///
    /// A missing `services` key yields an empty manifest; a missing or
    /// unparseable file is an error (the commands cannot do anything useful
    /// without the root descriptor).
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingDescriptor {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse manifest entries out of a root descriptor's JSON text.
    ///
    /// Entries keep the order they appear in the file. Non-string locator
    /// values are rejected rather than silently skipped.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let descriptor: RootDescriptor =
            serde_json::from_str(content).map_err(|e| Error::DescriptorParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(descriptor.services.len());
        for (name, value) in descriptor.services {
            let locator = value.as_str().ok_or_else(|| Error::DescriptorParse {
                path: path.to_path_buf(),
                message: format!("service '{}' locator must be a string", name),
            })?;

            entries.push(ServiceEntry {
                name,
                source: ServiceSource::parse(locator),
            });
        }

        Ok(Self { entries })
    }

    /// Iterate entries in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
