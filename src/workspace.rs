//! # Workspace Layout
//!
//! Centralizes the on-disk layout of a micro-store workspace so every command
//! derives paths the same way:
//!
//! ```text
//! <root>/
//!   package.json          root descriptor carrying the services manifest
//!   services/<name>/      externally-sourced service checkouts
//!   shared/               the internally-authored shared library
//!   gateway/ products/ orders/
//!                         dependents of the shared library (update-shared)
//! ```
//!
//! A `Workspace` is constructed once per command invocation from the `--root`
//! flag and passed down; there are no module-level path globals.

use std::path::{Path, PathBuf};

/// Name of the shared library package as published to its dependents.
pub const SHARED_PACKAGE: &str = "@micro-store/shared";

/// Path argument handed to the package manager when reinstalling the shared
/// library into a dependent (relative to that dependent's directory).
pub const SHARED_LOCAL_PATH: &str = "../shared";

/// Services that consume the shared library as a local dependency, in update
/// order. This list is fixed and independent of the services manifest.
pub const SHARED_DEPENDENTS: [&str; 3] = ["gateway", "products", "orders"];

/// Resolved directory layout for one workspace root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The workspace root's `package.json`, which carries the manifest.
    pub fn root_descriptor(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Parent directory of all service checkouts.
    pub fn services_dir(&self) -> PathBuf {
        self.root.join("services")
    }

    /// Checkout directory for a named service. The path is a deterministic
    /// function of the service name.
    pub fn service_dir(&self, name: &str) -> PathBuf {
        self.services_dir().join(name)
    }

    /// The shared library directory.
    pub fn shared_dir(&self) -> PathBuf {
        self.root.join("shared")
    }

    /// Directory of a shared-library dependent (a direct child of the root,
    /// not under `services/`).
    pub fn dependent_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// The `package.json` inside an arbitrary directory.
    pub fn descriptor_path(&self, dir: &Path) -> PathBuf {
        dir.join("package.json")
    }

    /// The schema descriptor whose presence triggers client generation.
    pub fn prisma_schema(&self, dir: &Path) -> PathBuf {
        dir.join("prisma").join("schema.prisma")
    }

    /// The version-control marker directory inside a checkout.
    pub fn git_marker(&self, dir: &Path) -> PathBuf {
        dir.join(".git")
    }
}
