//! Error types for launchpad operations.
//!
//! This module defines [`LaunchpadError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe, install, and launch failures are expected outcomes. They are
//!   turned into values (a `Missing` status, an install failure entry, an
//!   error line on the terminal) and never reach `main`.
//! - Everything else (log file, requirements file, stdin) propagates with `?`
//!   and ends the run with exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launchpad operations.
#[derive(Debug, Error)]
pub enum LaunchpadError {
    /// The log file could not be opened for appending.
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requirements file could not be written.
    #[error("Failed to write requirements file {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the operator failed.
    #[error("Failed to read answer for '{question}': {source}")]
    Prompt {
        question: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process ran but exited unsuccessfully.
    #[error("Command '{command}' returned non-zero exit status {}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A child process could not be started at all.
    #[error("Failed to spawn '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

/// Result type alias for launchpad operations.
pub type Result<T> = std::result::Result<T, LaunchpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_error_displays_path() {
        let err = LaunchpadError::LogFile {
            path: PathBuf::from("/var/log/app.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/var/log/app.log"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn manifest_error_displays_path() {
        let err = LaunchpadError::Manifest {
            path: PathBuf::from("requirements.txt"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("requirements.txt"));
    }

    #[test]
    fn command_failed_displays_exit_code() {
        let err = LaunchpadError::CommandFailed {
            command: "python3 -m pip install foo".into(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Command 'python3 -m pip install foo' returned non-zero exit status 1"
        );
    }

    #[test]
    fn command_failed_without_code() {
        let err = LaunchpadError::CommandFailed {
            command: "pip".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn spawn_failed_displays_command_and_message() {
        let err = LaunchpadError::SpawnFailed {
            command: "missing-python".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing-python"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LaunchpadError = io_err.into();
        assert!(matches!(err, LaunchpadError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: LaunchpadError = anyhow::anyhow!("something broke").into();
        assert_eq!(err.to_string(), "something broke");
    }
}
