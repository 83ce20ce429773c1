//! # Version-Control Collaborator
//!
//! Thin wrapper over the system `git` command. Using the system binary means
//! authentication just works: SSH keys from `~/.ssh/`, credential helpers,
//! personal access tokens — whatever the user has configured in
//! `~/.gitconfig` applies here too.
//!
//! Both operations inherit the parent's standard streams, so clone progress
//! and pull output appear live on the user's terminal.

use std::path::Path;

use crate::error::Result;
use crate::exec;

/// Handle on the version-control tool.
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone `location` at `branch` into `target_dir`.
    ///
    /// Runs `git clone --branch <branch> <location> <target_dir>` from the
    /// target's parent directory. The caller is responsible for ensuring the
    /// parent exists and the target does not.
    pub fn clone(&self, location: &str, branch: &str, target_dir: &Path) -> Result<()> {
        let cwd = target_dir.parent().unwrap_or_else(|| Path::new("."));
        let target = target_dir.display().to_string();
        exec::run(
            &self.program,
            &["clone", "--branch", branch, location, &target],
            cwd,
        )
    }

    /// Update an existing checkout in place via `git pull`.
    pub fn pull(&self, dir: &Path) -> Result<()> {
        exec::run(&self.program, &["pull"], dir)
    }
}
