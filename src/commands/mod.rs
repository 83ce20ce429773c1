//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `micro-store` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` plus the output
//!   configuration and performs the command's logic, calling into the
//!   `micro_store_tools` library.
//!
//! The three commands share a loop shape (`PENDING → RUNNING → SUCCESS /
//! SKIPPED / FATAL`) but deliberately not a failure policy; see each module's
//! docs for which steps are fatal.

pub mod prepare;
pub mod pull;
pub mod update_shared;
