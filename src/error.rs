//! Error types for deployment resolution.
//!
//! This module defines [`InfraError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing optional inputs never surface here; they resolve to defaults
//! - Malformed explicit inputs abort before any stack is built
//! - Use `anyhow::Error` (via `InfraError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deployment resolution.
#[derive(Debug, Error)]
pub enum InfraError {
    /// A context value is present but unusable.
    #[error("Invalid context value for '{key}': {message}")]
    InvalidContext { key: String, message: String },

    /// Failed to parse a context file.
    #[error("Failed to parse context file {path}: {message}")]
    ContextFileParse { path: PathBuf, message: String },

    /// Derived stack name violates the stack naming rules.
    #[error("Invalid stack name '{name}': {message}")]
    InvalidStackName { name: String, message: String },

    /// External command could not be run or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for deployment resolution.
pub type Result<T> = std::result::Result<T, InfraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_context_displays_key_and_message() {
        let err = InfraError::InvalidContext {
            key: "branchName".into(),
            message: "must not be empty".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("branchName"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn context_file_parse_displays_path() {
        let err = InfraError::ContextFileParse {
            path: PathBuf::from("/project/cdk.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/cdk.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn invalid_stack_name_displays_name() {
        let err = InfraError::InvalidStackName {
            name: "NextLandingFrontend-john.doe".into(),
            message: "invalid character".into(),
        };
        assert!(err.to_string().contains("NextLandingFrontend-john.doe"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = InfraError::CommandFailed {
            command: "whoami".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("whoami"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InfraError = io_err.into();
        assert!(matches!(err, InfraError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(InfraError::InvalidContext {
                key: "environment".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
