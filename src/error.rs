//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `micro-store` tooling. It uses the `thiserror` library to create an
//! `Error` enum covering all anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum representing all errors that can occur while
//!   pulling, preparing, or updating the workspace. Each variant corresponds
//!   to a specific type of error and includes contextual information (the
//!   external tool, its arguments, the working directory, exit status) to aid
//!   in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! Note that which errors are fatal and which are recoverable is decided by
//! the individual commands, not here: the pull command tolerates clone
//! failures but not pull failures, the prepare command tolerates descriptor
//! parse failures but not subprocess failures, and the update-shared command
//! tolerates uninstall failures only. The error type carries context; the
//! commands carry policy.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for micro-store tooling operations
#[derive(Error, Debug)]
pub enum Error {
    /// An external tool exited with a non-zero status, or could not be
    /// spawned at all.
    ///
    /// Includes the program, its arguments, the directory it ran in, and the
    /// exit code (`None` when the process was killed by a signal or never
    /// started).
    #[error("Command failed: {program} {} (in {dir}){}", args.join(" "), code.map(|c| format!(" with exit code {}", c)).unwrap_or_default())]
    Subprocess {
        program: String,
        args: Vec<String>,
        dir: String,
        code: Option<i32>,
    },

    /// A directory the operation requires does not exist.
    #[error("Directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// An expected `package.json` descriptor file is absent.
    #[error("Descriptor file not found: {}", path.display())]
    MissingDescriptor { path: PathBuf },

    /// A `package.json` descriptor could not be read or parsed.
    #[error("Failed to parse descriptor {}: {message}", path.display())]
    DescriptorParse { path: PathBuf, message: String },

    /// An error occurred during a filesystem operation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_subprocess_with_code() {
        let error = Error::Subprocess {
            program: "git".to_string(),
            args: vec!["pull".to_string()],
            dir: "services/auth".to_string(),
            code: Some(128),
        };
        let display = format!("{}", error);
        assert!(display.contains("git pull"));
        assert!(display.contains("services/auth"));
        assert!(display.contains("exit code 128"));
    }

    #[test]
    fn test_error_subprocess_without_code() {
        let error = Error::Subprocess {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
            dir: "shared".to_string(),
            code: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("npm install"));
        assert!(!display.contains("exit code"));
    }

    #[test]
    fn test_error_missing_directory() {
        let error = Error::MissingDirectory {
            path: PathBuf::from("/tmp/services"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Directory not found"));
        assert!(display.contains("/tmp/services"));
    }

    #[test]
    fn test_error_descriptor_parse() {
        let error = Error::DescriptorParse {
            path: PathBuf::from("services/auth/package.json"),
            message: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse descriptor"));
        assert!(display.contains("services/auth/package.json"));
        assert!(display.contains("expected value at line 1"));
    }
}
