//! # Store Error Types
//!
//! Error types for table operations.
//!
//! ## Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Kinds                                          │
//! │                                                                         │
//! │  Format      table unreadable, no header, bad row, required column     │
//! │              missing (reported with the columns that do exist)          │
//! │  Schema      a field named by an operation is not in the record/table  │
//! │  NotFound    a key lookup matched nothing                               │
//! │  Validation  input or stored value rejected by a rule                   │
//! │  Io          the file could not be opened, read or written              │
//! │                                                                         │
//! │  Every kind is recoverable: the menu reports it and carries on.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use hotel_core::{CoreError, ValidationError};
use thiserror::Error;

/// The five categories every [`StoreError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Schema,
    NotFound,
    Validation,
    Io,
}

/// Table operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table source is malformed.
    ///
    /// ## When This Occurs
    /// - File is empty (no header row)
    /// - A row has more values than the header has columns
    /// - Text is not valid UTF-8
    #[error("Table '{table}' is malformed: {reason}")]
    Format { table: String, reason: String },

    /// A column the domain relies on is absent from the table.
    #[error("Table '{table}' has no '{missing}' column. Available columns are: {}", .available.join(", "))]
    MissingColumn {
        table: String,
        missing: String,
        available: Vec<String>,
    },

    /// A field named by an operation is not part of the record or table.
    #[error("Field '{field}' not found in table '{table}'")]
    Schema { table: String, field: String },

    /// A key lookup matched no record.
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Input failed a rule.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A stored value cannot be interpreted.
    #[error("Field '{field}' holds an invalid value: '{value}'")]
    InvalidValue { field: String, value: String },

    /// Reading or writing the backing file failed.
    #[error("I/O error on {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Format { .. } | StoreError::MissingColumn { .. } => ErrorKind::Format,
            StoreError::Schema { .. } => ErrorKind::Schema,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Validation(_) | StoreError::InvalidValue { .. } => ErrorKind::Validation,
            StoreError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Creates a NotFound error for a given entity and key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// Creates a Schema error.
    pub fn schema(table: impl Into<String>, field: impl Into<String>) -> Self {
        StoreError::Schema {
            table: table.into(),
            field: field.into(),
        }
    }

    /// Creates an Io error with a description of what was being accessed.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        StoreError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Maps record-level failures onto store errors.
///
/// ## Mapping
/// ```text
/// CoreError::MissingField   → StoreError::Schema
/// CoreError::InvalidNumber  → StoreError::InvalidValue
/// CoreError::Validation     → StoreError::Validation
/// ```
///
/// The table name is not known at this level; callers that have it use
/// [`StoreError::schema`] directly.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingField { field } => StoreError::Schema {
                table: "record".to_string(),
                field,
            },
            CoreError::InvalidNumber { field, value } => StoreError::InvalidValue { field, value },
            CoreError::Validation(e) => StoreError::Validation(e),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_lists_available() {
        let err = StoreError::MissingColumn {
            table: "Companies.csv".to_string(),
            missing: "Company Type".to_string(),
            available: vec!["Company Name".to_string(), "Cooperation Status".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Table 'Companies.csv' has no 'Company Type' column. Available columns are: Company Name, Cooperation Status"
        );
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_core_error_mapping() {
        let err: StoreError = CoreError::missing_field("room_id").into();
        assert_eq!(err.kind(), ErrorKind::Schema);

        let err: StoreError = CoreError::InvalidNumber {
            field: "Twin Price".to_string(),
            value: "n/a".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_io_kind() {
        let err = StoreError::io("Guest.csv", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("Guest.csv"));
    }
}
