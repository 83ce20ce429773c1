//! # Update-Shared Command Implementation
//!
//! Rebuilds the internal shared library and reinstalls it as a local
//! dependency into the fixed set of services that consume it
//! ([`micro_store_tools::workspace::SHARED_DEPENDENTS`]). The manifest is not
//! consulted; the dependent list is a separate, hardcoded configuration
//! source.
//!
//! ## Failure Policy
//!
//! - A failed shared-library **build** is fatal before any dependent is
//!   touched.
//! - A failed **uninstall** of the old dependency is logged and skipped (the
//!   dependency may simply not be installed yet); the reinstall proceeds.
//! - A failed **reinstall** is fatal and aborts immediately.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::warn;

use micro_store_tools::output::{emoji, OutputConfig};
use micro_store_tools::pkg::PackageManager;
use micro_store_tools::workspace::{Workspace, SHARED_DEPENDENTS, SHARED_LOCAL_PATH, SHARED_PACKAGE};

/// Rebuild the shared library and reinstall it into its dependents
#[derive(Args, Debug)]
pub struct UpdateSharedArgs {
    /// Workspace root containing the shared library and its dependents.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Execute the `update-shared` command.
pub fn execute(args: UpdateSharedArgs, out: &OutputConfig) -> Result<()> {
    // Absolute paths: subprocesses run with varying working directories
    let workspace = Workspace::new(std::fs::canonicalize(&args.root)?);
    let pm = PackageManager::new();

    println!("\n=== Updating shared module ===\n");

    // 1. Build the shared package
    println!(
        "{} Building the shared package...",
        emoji(out, "🔨", "[BUILD]")
    );

    if let Err(e) = pm.run_script(&workspace.shared_dir(), "build") {
        eprintln!(
            "{} Failed to build the shared package. Aborting.",
            emoji(out, "❌", "[FAIL]")
        );
        return Err(e.into());
    }

    // 2. Reinstall it into each dependent service
    for name in SHARED_DEPENDENTS {
        reinstall_shared(&workspace, &pm, out, name)?;
    }

    println!(
        "\n{} Process completed successfully!",
        emoji(out, "🎉", "[DONE]")
    );
    println!(
        "{} To apply the changes, restart the dependent services",
        emoji(out, "💡", "[HINT]")
    );

    Ok(())
}

/// Reinstall the shared package into one dependent service.
fn reinstall_shared(
    workspace: &Workspace,
    pm: &PackageManager,
    out: &OutputConfig,
    name: &str,
) -> Result<()> {
    let service_dir = workspace.dependent_dir(name);

    println!(
        "\n{} Reinstalling shared in {}...\n",
        emoji(out, "🔁", "[SYNC]"),
        name
    );

    // The old dependency may not be installed at all; don't let that stop us
    if let Err(e) = pm.remove(&service_dir, SHARED_PACKAGE) {
        println!(
            "{} Could not uninstall the package in {}, continuing...",
            emoji(out, "⚠️ ", "[WARN]"),
            name
        );
        warn!("uninstall failed in {}: {}", name, e);
    }

    if let Err(e) = pm.install_local(&service_dir, SHARED_LOCAL_PATH) {
        eprintln!(
            "{} Installation failed in {}. Aborting.",
            emoji(out, "❌", "[FAIL]"),
            name
        );
        return Err(e.into());
    }

    Ok(())
}
