//! # Pull Command Implementation
//!
//! Clones or updates every service listed in the workspace manifest, one at a
//! time, in manifest order.
//!
//! ## Failure Policy
//!
//! The policy is asymmetric and intentional:
//! - A failed **clone** is logged and the loop continues with the next
//!   service (a missing or inaccessible remote should not block the rest).
//! - A failed **pull** of an existing checkout is fatal to the whole run —
//!   an existing checkout that cannot be updated usually means local state
//!   needs human attention.
//! - A directory that exists but is not a git checkout is warned about and
//!   left untouched.
//!
//! Running the command twice with no intervening remote change is safe: the
//! second run only issues pulls, never destructive actions.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::warn;

use micro_store_tools::git::Git;
use micro_store_tools::manifest::Manifest;
use micro_store_tools::output::{emoji, OutputConfig};
use micro_store_tools::workspace::Workspace;

/// Clone or update every service listed in the manifest
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Workspace root containing package.json and the services directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Execute the `pull` command.
pub fn execute(args: PullArgs, out: &OutputConfig) -> Result<()> {
    // Absolute paths: subprocesses run with varying working directories
    let workspace = Workspace::new(fs::canonicalize(&args.root)?);
    let git = Git::new();
    let manifest = Manifest::from_file(&workspace.root_descriptor())?;

    println!(
        "{} Pulling Micro Store microservices...",
        emoji(out, "🚀", "[PULL]")
    );

    // Create services directory if it doesn't exist
    let services_dir = workspace.services_dir();
    if !services_dir.exists() {
        fs::create_dir_all(&services_dir)?;
        println!("{} Created services directory", emoji(out, "📁", "[DIR]"));
    }

    // Clone or pull each microservice
    for entry in manifest.iter() {
        let service_dir = workspace.service_dir(&entry.name);

        if service_dir.exists() {
            println!(
                "{} Updating {} microservice from {}...",
                emoji(out, "⏳", "[WAIT]"),
                entry.name,
                entry.source.location
            );

            if workspace.git_marker(&service_dir).exists() {
                // Pull latest changes; failure here is fatal
                if let Err(e) = git.pull(&service_dir) {
                    eprintln!("{} Failed to pull {}", emoji(out, "❌", "[FAIL]"), entry.name);
                    return Err(e.into());
                }
            } else {
                println!(
                    "{} {} directory exists but is not a git repository. Skipping...",
                    emoji(out, "⚠️ ", "[WARN]"),
                    entry.name
                );
            }
        } else {
            println!(
                "{} Cloning {} microservice from {}...",
                emoji(out, "⏳", "[WAIT]"),
                entry.name,
                entry.source.location
            );

            // Clone failure is non-fatal: continue with the other services
            if let Err(e) = git.clone(&entry.source.location, &entry.source.branch, &service_dir) {
                eprintln!("{} Failed to clone {}", emoji(out, "❌", "[FAIL]"), entry.name);
                println!(
                    "{} Make sure the repository {} exists and you have access to it",
                    emoji(out, "💡", "[HINT]"),
                    entry.source.location
                );
                warn!("clone failed for {}: {}", entry.name, e);
                continue;
            }
        }

        println!(
            "{} Microservice {} is ready",
            emoji(out, "✅", "[OK]"),
            entry.name
        );
    }

    println!(
        "{} All microservices pulled successfully!",
        emoji(out, "🎉", "[DONE]")
    );
    println!(
        "{} You can now run 'npm run docker:up' to start all services",
        emoji(out, "💡", "[HINT]")
    );

    Ok(())
}
