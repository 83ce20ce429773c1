//! Shared test utilities for the CLI E2E tests.
//!
//! The tooling under test never does anything itself — it shells out to
//! `git`, `npm` and `npx`. The E2E tests therefore run the real binary
//! against a temporary workspace whose `PATH` is fronted by stub shell
//! scripts standing in for those tools. Every stub appends its argv and
//! working directory to an invocation log, so tests can assert exactly which
//! commands were issued, in which order, and in which directory.
//!
//! Failure injection: each stub checks a `*_FAIL_MATCH` environment variable
//! and exits 1 when its command line contains that substring:
//!
//! - `GIT_FAIL_MATCH` for the `git` stub
//! - `NPM_FAIL_MATCH` for the `npm` stub
//! - `NPX_FAIL_MATCH` for the `npx` stub
//!
//! The `git` stub also mimics a successful clone by creating the target
//! directory with a `.git` marker inside, which is what the idempotence
//! tests rely on.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common root `package.json` snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Two services, one with an explicit branch.
    pub const TWO_SERVICES: &str = r#"{
  "name": "micro-store",
  "services": {
    "svc-a": "https://x/a.git#dev",
    "svc-b": "https://x/b.git"
  }
}"#;

    /// A single service on the default branch.
    pub const ONE_SERVICE: &str = r#"{
  "name": "micro-store",
  "services": {
    "auth": "https://x/auth.git"
  }
}"#;

    /// No services key at all.
    pub const EMPTY: &str = r#"{ "name": "micro-store" }"#;

    /// Invalid JSON for error testing.
    pub const INVALID: &str = "{ not json at all";
}

const GIT_STUB: &str = r#"#!/bin/sh
echo "git $* @$PWD" >> "$INVOCATION_LOG"
if [ -n "$GIT_FAIL_MATCH" ]; then
  case "$*" in
    *"$GIT_FAIL_MATCH"*) exit 1 ;;
  esac
fi
if [ "$1" = "clone" ]; then
  for last in "$@"; do :; done
  mkdir -p "$last/.git"
fi
exit 0
"#;

const NPM_STUB: &str = r#"#!/bin/sh
echo "npm $* @$PWD" >> "$INVOCATION_LOG"
if [ -n "$NPM_FAIL_MATCH" ]; then
  case "$*" in
    *"$NPM_FAIL_MATCH"*) exit 1 ;;
  esac
fi
exit 0
"#;

const NPX_STUB: &str = r#"#!/bin/sh
echo "npx $* @$PWD" >> "$INVOCATION_LOG"
if [ -n "$NPX_FAIL_MATCH" ]; then
  case "$*" in
    *"$NPX_FAIL_MATCH"*) exit 1 ;;
  esac
fi
exit 0
"#;

/// A temporary micro-store workspace with stubbed external tools.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture with stub `git`/`npm`/`npx` scripts installed.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");

        let bin_dir = temp_dir.path().join("stub-bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create stub bin directory");
        write_stub(&bin_dir.join("git"), GIT_STUB);
        write_stub(&bin_dir.join("npm"), NPM_STUB);
        write_stub(&bin_dir.join("npx"), NPX_STUB);

        Self { temp_dir }
    }

    /// Write the root `package.json` carrying the services manifest.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("package.json", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create a directory (and parents) inside the workspace.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Create `services/<name>` containing a `.git` marker, as a clone
    /// would have left it.
    #[allow(dead_code)]
    pub fn with_service_checkout(self, name: &str) -> Self {
        self.with_dir(&format!("services/{}/.git", name))
    }

    /// Get the path to the temporary workspace root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the workspace.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Path of the stub tools' invocation log.
    pub fn invocation_log(&self) -> PathBuf {
        self.temp_dir.path().join("invocations.log")
    }

    /// All stub invocations so far, one `tool args @cwd` line each, in
    /// issue order. Empty when no tool was ever invoked.
    #[allow(dead_code)]
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.invocation_log()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Create a command for the given subcommand, running in this fixture's
    /// workspace with the stub tools fronting `PATH`.
    pub fn command(&self, subcommand: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("micro-store");

        let stub_bin = self.temp_dir.path().join("stub-bin");
        let path = format!(
            "{}:{}",
            stub_bin.display(),
            env::var("PATH").unwrap_or_default()
        );

        cmd.current_dir(self.path())
            .env("PATH", path)
            .env("INVOCATION_LOG", self.invocation_log())
            .arg(subcommand);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_stub(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write stub script");
    let mut perms = fs::metadata(path)
        .expect("Failed to stat stub script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod stub script");
}
