//! # CLI Error Type
//!
//! Unified error type for menu operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Hotel Desk                             │
//! │                                                                         │
//! │  Menu operation ("Change check-out date")                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<(), CliError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::NotFound { .. } ─────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule Error? ─── ValidationError::CheckOut.. ──── CliError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu loop:                                                             │
//! │    recoverable  → "Error: Guest not found: G-9"; menu shown again       │
//! │    end of input → leave the menus and close the hotel                   │
//! │    terminal I/O → abort                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use hotel_core::{CoreError, ValidationError};
use hotel_store::StoreError;
use thiserror::Error;

/// Error raised by a menu operation.
///
/// Carries a machine-readable `code` and a message fit for the desk clerk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No record matched the key
    NotFound,
    /// Input or stored value rejected by a rule
    ValidationError,
    /// Table is malformed or lacks a column
    FormatError,
    /// Field is not part of the table
    SchemaError,
    /// Table file could not be read or written
    StorageError,
    /// The input stream is closed
    EndOfInput,
    /// Writing to or reading from the terminal failed
    Terminal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, key: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, key))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// The input stream ended.
    pub fn end_of_input() -> Self {
        CliError::new(ErrorCode::EndOfInput, "No more input")
    }

    /// Returns true when the menus cannot carry on after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::EndOfInput | ErrorCode::Terminal)
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => CliError::not_found(&entity, &key),
            StoreError::Validation(e) => CliError::validation(e.to_string()),
            e @ StoreError::InvalidValue { .. } => CliError::validation(e.to_string()),
            e @ (StoreError::Format { .. } | StoreError::MissingColumn { .. }) => {
                tracing::error!(error = %e, "Table format error");
                CliError::new(ErrorCode::FormatError, e.to_string())
            }
            e @ StoreError::Schema { .. } => {
                tracing::error!(error = %e, "Schema error");
                CliError::new(ErrorCode::SchemaError, e.to_string())
            }
            StoreError::Io { context, source } => {
                // Log the actual error but return a generic message
                tracing::error!(path = %context, error = %source, "Table I/O failed");
                CliError::new(
                    ErrorCode::StorageError,
                    format!("Could not read or write {}. The change is kept in memory only.", context),
                )
            }
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(StoreError::from(err))
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

/// Terminal failures end the session.
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::new(ErrorCode::Terminal, format!("Terminal I/O failed: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for menu operations.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file named on the command line does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the config file failed.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Config file is invalid: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_store_error_mapping() {
        let err: CliError = StoreError::not_found("Guest", "G-9").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Guest not found: G-9");

        let err: CliError = StoreError::schema("Guest.csv", "room").into();
        assert_eq!(err.code, ErrorCode::SchemaError);

        let err: CliError = StoreError::MissingColumn {
            table: "Companies.csv".to_string(),
            missing: "Suite Price".to_string(),
            available: vec!["Company Name".to_string()],
        }
        .into();
        assert_eq!(err.code, ErrorCode::FormatError);
        assert!(err.message.contains("Available columns are: Company Name"));
    }

    #[test]
    fn test_io_error_hides_detail() {
        let err: CliError = StoreError::io(
            "data/Guest.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "os error 13"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("data/Guest.csv"));
        assert!(!err.message.contains("os error"));
    }

    #[test]
    fn test_validation_message() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let err: CliError = StoreError::from(ValidationError::CheckOutNotAfterCheckIn {
            check_in: d("2024-06-02"),
            check_out: d("2024-06-02"),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Check-out date must be after the check-in date"));
    }

    #[test]
    fn test_fatal_codes() {
        assert!(CliError::end_of_input().is_fatal());
        assert!(CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "x")).is_fatal());
        assert!(!CliError::validation("bad").is_fatal());
    }
}
