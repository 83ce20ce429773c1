//! # Micro-Store Tooling Library
//!
//! This library provides the core functionality behind the `micro-store`
//! command-line tool: pulling a set of external microservice repositories,
//! preparing them (dependency installation, optional ORM client generation,
//! optional build), and rebuilding the internal shared library into the
//! services that depend on it.
//!
//! There is deliberately no runtime system here. Every operation is a direct
//! invocation of an external collaborator — the version-control tool or the
//! package manager — with pass-through status checking. The library's job is
//! to read the manifest, derive paths, and shell out in the right order.
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: the `services` mapping in the workspace
//!   root's `package.json`, driving pull and prepare iteration.
//! - **Descriptor (`descriptor`)**: the per-directory `package.json`, read
//!   only to discover named scripts.
//! - **Workspace (`workspace`)**: the deterministic on-disk layout
//!   (`services/<name>`, `shared/`, and the fixed shared-library dependents).
//! - **Collaborators (`git`, `pkg`)**: wrappers over the external tools,
//!   built on a single blocking subprocess runner (`exec`) that inherits the
//!   parent's standard streams.
//! - **Output (`output`)**: constructor-injected console configuration for
//!   the emoji/plain status markers.
//!
//! ## Execution Flow
//!
//! Each command is a strictly sequential loop over manifest entries (or, for
//! the shared-library update, a fixed dependent list). There is no caching,
//! no parallelism, no retry and no rollback: a step either succeeds and the
//! loop continues, is skipped with a logged reason, or is fatal and the
//! process exits non-zero. Which failures are fatal differs per command and
//! is documented on each command module.

pub mod descriptor;
pub mod error;
pub mod exec;
pub mod git;
pub mod manifest;
pub mod output;
pub mod pkg;
pub mod workspace;
