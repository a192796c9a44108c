//! Error types for waypoint operations.
//!
//! This module defines [`WaypointError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store operations degrade to no-ops and do not return errors
//! - Use `WaypointError` where a caller must decide (config, definitions, imports)
//! - Use `anyhow::Error` (via `WaypointError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for waypoint operations.
#[derive(Debug, Error)]
pub enum WaypointError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A wizard was created without any steps.
    #[error("A wizard needs at least one step")]
    EmptyWizard,

    /// A wizard definition file is malformed.
    #[error("Invalid wizard definition: {message}")]
    WizardDefinitionError { message: String },

    /// A field pattern is not a valid regular expression.
    #[error("Invalid pattern for field '{field}': {message}")]
    InvalidPattern { field: String, message: String },

    /// Serialized links could not be parsed.
    #[error("Failed to import links: {message}")]
    LinkImportError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for waypoint operations.
pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = WaypointError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = WaypointError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn empty_wizard_has_message() {
        assert!(WaypointError::EmptyWizard.to_string().contains("at least one step"));
    }

    #[test]
    fn invalid_pattern_displays_field() {
        let err = WaypointError::InvalidPattern {
            field: "email".into(),
            message: "unclosed group".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn link_import_error_displays_message() {
        let err = WaypointError::LinkImportError {
            message: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WaypointError = io_err.into();
        assert!(matches!(err, WaypointError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(WaypointError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
