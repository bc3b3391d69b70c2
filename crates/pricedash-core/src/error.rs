//! Error types for pricedash startup and configuration.
//!
//! The pricing core itself has no recoverable error conditions. Everything
//! here comes from the ambient layer: reading the config file, creating the
//! log directory, locating the home directory.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`DashError`].
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors surfaced before or around the dashboard run.
#[derive(Debug, Error)]
pub enum DashError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration file exists but could not be read
    #[error("Failed to read configuration at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is invalid YAML or has unknown values
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // TUI Errors
    // =========================================================================
    /// Terminal initialization failed
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error (bug in pricedash)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DashError {
    /// Create a ConfigRead error
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::ConfigInvalid { .. })
    }

    /// Returns true if this error is fatal (should exit application)
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::TerminalInit { .. } | Self::Internal { .. })
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::ConfigRead { .. } => Some("Check the permissions of ~/.pricedash/config.yaml"),
            Self::ConfigInvalid { .. } => {
                Some("Valid keys: theme, display_mode, show_settings, tick_rate_ms")
            }
            Self::DirectoryCreation { .. } => Some("Pass --log-dir to write logs elsewhere"),
            Self::TerminalInit { .. } => Some("Try running in a different terminal"),
            Self::Internal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_invalid_error() {
        let err = DashError::config_invalid("/home/user/.pricedash/config.yaml", "bad theme");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("bad theme"));
        assert!(err.is_config_error());
        assert!(!err.is_fatal());
        assert!(err.guidance().is_some());
    }

    #[test]
    fn test_config_read_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DashError::config_read("/tmp/config.yaml", io);
        assert!(err.is_config_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_classification() {
        assert!(DashError::internal("bug").is_fatal());
        assert!(
            DashError::TerminalInit {
                message: "no tty".into()
            }
            .is_fatal()
        );
        assert_eq!(DashError::internal("bug").guidance(), None);
    }
}
