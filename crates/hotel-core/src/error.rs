//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - Record access and field parsing failures       │
//! │  └── ValidationError  - Input and date-rule failures                   │
//! │                                                                         │
//! │  hotel-store errors (separate crate)                                   │
//! │  └── StoreError       - Format / Schema / NotFound / Validation / Io   │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → Terminal  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while reading typed values out of a record.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record has no such field.
    ///
    /// ## When This Occurs
    /// - A domain table was written without one of its required columns
    /// - A record was inserted with a different field set than the table
    #[error("Field '{field}' is not present in the record")]
    MissingField { field: String },

    /// A numeric field holds text that is not a number.
    #[error("Field '{field}' holds an invalid numeric value: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        CoreError::MissingField {
            field: field.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store mutation runs, so a failed validation never
/// leaves a half-applied change behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Arrival date is today or in the past.
    #[error("Check-in date must be from tomorrow onwards (got {check_in}, today is {today})")]
    CheckInNotInFuture { check_in: NaiveDate, today: NaiveDate },

    /// Departure is not strictly after arrival.
    #[error("Check-out date must be after the check-in date (check-in {check_in}, check-out {check_out})")]
    CheckOutNotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidNumber {
            field: "Nights Occupied Last Year".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Field 'Nights Occupied Last Year' holds an invalid numeric value: 'lots'"
        );
    }

    #[test]
    fn test_date_rule_messages() {
        let err = ValidationError::CheckInNotInFuture {
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!(err
            .to_string()
            .starts_with("Check-in date must be from tomorrow onwards"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "first_name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
