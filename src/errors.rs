//! Error type for quotemap operations.
//!
//! Calculators never fail: their inputs are clamped at the boundary. Errors
//! only arise when building configuration (tier schedules, coefficients,
//! node bounds) or touching the filesystem.
//!
//! # Error Codes
//!
//! Error codes are assigned by category:
//! - E001-E009: I/O and filesystem errors
//! - E020-E029: Configuration errors
//! - E050-E059: Validation errors
//!
//! # Example
//!
//! ```rust
//! use quotemap::errors::{ErrorCode, QuotemapError};
//!
//! let err = QuotemapError::constraint("minimum_monthly_fee", "must be non-negative");
//! assert_eq!(err.code(), ErrorCode::VALIDATION_CONSTRAINT);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - target already exists
    pub const IO_ALREADY_EXISTS: ErrorCode = ErrorCode("E004");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Config error - file could not be parsed
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - explicit config file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");

    /// Validation error - constraint violated
    pub const VALIDATION_CONSTRAINT: ErrorCode = ErrorCode("E052");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for quotemap operations.
#[derive(Debug, Error)]
pub enum QuotemapError {
    /// I/O and filesystem errors.
    #[error("[{code}] {message}")]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors.
    #[error("[{code}] {message}")]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// A value that breaks a configuration invariant.
    #[error("[{code}] {field}: {message}")]
    Validation {
        code: ErrorCode,
        field: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, QuotemapError>;

impl QuotemapError {
    /// Wrap an `std::io::Error`, picking the code from its kind.
    pub fn from_io(source: std::io::Error, path: Option<&Path>) -> Self {
        let code = match source.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
            std::io::ErrorKind::AlreadyExists => ErrorCode::IO_ALREADY_EXISTS,
            _ => ErrorCode::IO_GENERIC,
        };
        let message = match path {
            Some(path) => format!("{}: {}", path.display(), source),
            None => source.to_string(),
        };
        Self::Io {
            code,
            message,
            path: path.map(Path::to_path_buf),
            source: Some(source),
        }
    }

    pub fn already_exists(path: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            code: ErrorCode::IO_ALREADY_EXISTS,
            message: message.into(),
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    pub fn config(code: ErrorCode, message: impl Into<String>, path: Option<&Path>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path: path.map(Path::to_path_buf),
        }
    }

    pub fn constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_CONSTRAINT,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. } | Self::Config { code, .. } | Self::Validation { code, .. } => {
                *code
            }
        }
    }

    /// Whether the user can resolve this by editing input or configuration.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { code, .. } => *code == ErrorCode::IO_ALREADY_EXISTS,
            Self::Config { .. } | Self::Validation { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_code_follows_kind() {
        let err = QuotemapError::from_io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            Some(Path::new("/tmp/.quotemap.toml")),
        );
        assert_eq!(err.code(), ErrorCode::IO_FILE_NOT_FOUND);
        assert!(!err.is_user_fixable());
        assert!(err.to_string().contains(".quotemap.toml"));
    }

    #[test]
    fn test_validation_display_names_field() {
        let err = QuotemapError::constraint("tiers", "schedule must not be empty");
        assert_eq!(err.to_string(), "[E052] tiers: schedule must not be empty");
    }

    #[test]
    fn test_already_exists_is_user_fixable() {
        let err = QuotemapError::already_exists(Path::new("x"), "exists");
        assert_eq!(err.code().as_str(), "E004");
        assert!(err.is_user_fixable());
    }
}
