//! # Package-Manager Collaborator
//!
//! Wraps the external package manager (`npm`) and the package runner (`npx`)
//! used for client-code generation. Like [`crate::git`], everything runs as a
//! blocking subprocess with inherited streams and the exit status as the only
//! result.
//!
//! Script discovery (does this service declare a `build` script?) is not done
//! here; that is the descriptor's job, see [`crate::descriptor`].

use std::path::Path;

use crate::error::Result;
use crate::exec;

/// Handle on the package-manager tooling.
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
    runner: String,
}

impl Default for PackageManager {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            runner: "npx".to_string(),
        }
    }
}

impl PackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a directory's dependencies (`npm install`).
    pub fn install(&self, dir: &Path) -> Result<()> {
        exec::run(&self.program, &["install"], dir)
    }

    /// Run a named script (`npm run <name>`).
    pub fn run_script(&self, dir: &Path, name: &str) -> Result<()> {
        exec::run(&self.program, &["run", name], dir)
    }

    /// Remove a dependency (`npm remove <dep>`).
    pub fn remove(&self, dir: &Path, dep: &str) -> Result<()> {
        exec::run(&self.program, &["remove", dep], dir)
    }

    /// Install a dependency from a local path (`npm install <path>`).
    pub fn install_local(&self, dir: &Path, path: &str) -> Result<()> {
        exec::run(&self.program, &["install", path], dir)
    }

    /// Generate the ORM client (`npx prisma generate`).
    pub fn prisma_generate(&self, dir: &Path) -> Result<()> {
        exec::run(&self.runner, &["prisma", "generate"], dir)
    }
}
