//! # Subprocess Invocation
//!
//! All external tools (git, the package manager, the generator runner) go
//! through [`run`]: a synchronous, blocking invocation that inherits the
//! parent's standard streams so the child's output is visible live, and
//! reports only the exit status back to the caller.
//!
//! There is deliberately no output capture, no timeout, no retry and no
//! parallelism here; the commands process one directory at a time and treat
//! the exit status as the entire contract with the external tool.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Run `program args...` in `cwd`, blocking until it exits.
///
/// Stdin/stdout/stderr are inherited from the parent process. Returns
/// `Ok(())` on exit code 0; a non-zero exit, a signal death, or a failure to
/// spawn at all (tool not installed) becomes [`Error::Subprocess`].
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    debug!("running: {} {} (cwd: {})", program, args.join(" "), cwd.display());

    let subprocess_error = |code: Option<i32>| Error::Subprocess {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        dir: cwd.display().to_string(),
        code,
    };

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|_| subprocess_error(None))?;

    if status.success() {
        Ok(())
    } else {
        Err(subprocess_error(status.code()))
    }
}
