//! # Prepare Command Implementation
//!
//! Walks the manifest and, for every service with a present checkout and a
//! present `package.json`, performs up to three sequential steps:
//!
//! 1. Dependency installation (`npm install`).
//! 2. ORM client generation (`npx prisma generate`) — only when the service
//!    ships a `prisma/schema.prisma`.
//! 3. Build (`npm run build`) — only when the descriptor declares a `build`
//!    script; otherwise the step is skipped with an informational message.
//!
//! After the loop, the same install/build sequence (without the schema step)
//! runs once for the shared library directory, if present.
//!
//! ## Failure Policy
//!
//! Every subprocess failure is fatal: the process exits non-zero immediately,
//! with no cleanup. A service whose descriptor cannot be parsed, however, is
//! logged and skipped, and the loop continues — as is a shared-library
//! descriptor that cannot be parsed after its install step. The asymmetry
//! mirrors long-standing behavior and is kept on purpose.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use micro_store_tools::descriptor::Descriptor;
use micro_store_tools::error::Error;
use micro_store_tools::manifest::Manifest;
use micro_store_tools::output::{emoji, OutputConfig};
use micro_store_tools::pkg::PackageManager;
use micro_store_tools::workspace::Workspace;

/// Install dependencies, generate clients and build each service
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Workspace root containing package.json and the services directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Execute the `prepare` command.
pub fn execute(args: PrepareArgs, out: &OutputConfig) -> Result<()> {
    // Absolute paths: subprocesses run with varying working directories
    let workspace = Workspace::new(std::fs::canonicalize(&args.root)?);
    let pm = PackageManager::new();
    let manifest = Manifest::from_file(&workspace.root_descriptor())?;

    println!(
        "{} Preparing Micro Store microservices...",
        emoji(out, "🔧", "[PREP]")
    );

    let services_dir = workspace.services_dir();
    if !services_dir.exists() {
        eprintln!(
            "{} Services directory not found. Please run 'micro-store pull' first.",
            emoji(out, "❌", "[FAIL]")
        );
        return Err(Error::MissingDirectory { path: services_dir }.into());
    }

    // Prepare each microservice
    for entry in manifest.iter() {
        let service_dir = workspace.service_dir(&entry.name);

        if !service_dir.exists() {
            println!(
                "{} Service {} not found. Skipping...",
                emoji(out, "⚠️ ", "[WARN]"),
                entry.name
            );
            continue;
        }

        let descriptor_path = workspace.descriptor_path(&service_dir);
        if !descriptor_path.exists() {
            println!(
                "{} package.json not found in {}. Skipping...",
                emoji(out, "⚠️ ", "[WARN]"),
                entry.name
            );
            continue;
        }

        println!(
            "{} Installing dependencies for {}...",
            emoji(out, "📦", "[DEPS]"),
            entry.name
        );

        if let Err(e) = pm.install(&service_dir) {
            eprintln!(
                "{} Failed to install dependencies for {}",
                emoji(out, "❌", "[FAIL]"),
                entry.name
            );
            return Err(e.into());
        }

        // Generate the ORM client only when the schema descriptor exists
        if workspace.prisma_schema(&service_dir).exists() {
            println!(
                "{} Generating Prisma client for {}...",
                emoji(out, "🗄️ ", "[ORM]"),
                entry.name
            );

            if let Err(e) = pm.prisma_generate(&service_dir) {
                eprintln!(
                    "{} Failed to generate Prisma client for {}",
                    emoji(out, "❌", "[FAIL]"),
                    entry.name
                );
                return Err(e.into());
            }
        }

        // An unreadable descriptor skips the service; a failed build kills
        // the run. Historical behavior, kept as-is.
        let descriptor = match Descriptor::from_file(&descriptor_path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!(
                    "{} Error reading package.json for {}: {}",
                    emoji(out, "❌", "[FAIL]"),
                    entry.name,
                    e
                );
                continue;
            }
        };

        if descriptor.has_script("build") {
            println!("{} Building {}...", emoji(out, "🔨", "[BUILD]"), entry.name);

            if let Err(e) = pm.run_script(&service_dir, "build") {
                eprintln!(
                    "{} Failed to build {}",
                    emoji(out, "❌", "[FAIL]"),
                    entry.name
                );
                return Err(e.into());
            }
        } else {
            println!(
                "{} No build script found for {}. Skipping build...",
                emoji(out, "ℹ️ ", "[INFO]"),
                entry.name
            );
        }

        println!(
            "{} Service {} prepared successfully",
            emoji(out, "✅", "[OK]"),
            entry.name
        );
    }

    prepare_shared(&workspace, &pm, out)?;

    println!(
        "{} All microservices prepared successfully!",
        emoji(out, "🎉", "[DONE]")
    );
    println!(
        "{} You can now run 'npm start' to start all services",
        emoji(out, "💡", "[HINT]")
    );

    Ok(())
}

/// Install and build the shared library, when present.
///
/// Unlike the per-service loop, a parse failure of the shared descriptor
/// after installation is non-fatal: the build step is simply not attempted.
fn prepare_shared(workspace: &Workspace, pm: &PackageManager, out: &OutputConfig) -> Result<()> {
    let shared_dir = workspace.shared_dir();
    if !shared_dir.exists() {
        return Ok(());
    }

    let descriptor_path = workspace.descriptor_path(&shared_dir);
    if !descriptor_path.exists() {
        return Ok(());
    }

    println!(
        "{} Installing dependencies for shared library...",
        emoji(out, "📦", "[DEPS]")
    );

    if let Err(e) = pm.install(&shared_dir) {
        eprintln!(
            "{} Failed to install dependencies for shared library",
            emoji(out, "❌", "[FAIL]")
        );
        return Err(e.into());
    }

    match Descriptor::from_file(&descriptor_path) {
        Ok(descriptor) => {
            if descriptor.has_script("build") {
                println!("{} Building shared library...", emoji(out, "🔨", "[BUILD]"));

                if let Err(e) = pm.run_script(&shared_dir, "build") {
                    eprintln!(
                        "{} Failed to build shared library",
                        emoji(out, "❌", "[FAIL]")
                    );
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            eprintln!(
                "{} Error reading shared package.json: {}",
                emoji(out, "❌", "[FAIL]"),
                e
            );
        }
    }

    println!(
        "{} Shared library prepared successfully",
        emoji(out, "✅", "[OK]")
    );

    Ok(())
}
