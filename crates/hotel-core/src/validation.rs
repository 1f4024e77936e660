//! # Validation Module
//!
//! Call-site rules checked before a record is inserted or updated.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (hotel-cli)                                             │
//! │  └── Collects raw text from prompts                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present                                           │
//! │  ├── Dates parse as YYYY-MM-DD                                         │
//! │  └── Date ordering rules (future arrival, departure after arrival)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: TabularStore (hotel-store)                                   │
//! │  └── Field must exist in the table schema                              │
//! │                                                                         │
//! │  Nothing is mutated until layers 1 and 2 have passed.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Today" is always a parameter. Callers read the clock; this module never does.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::record::Record;
use crate::types::{booking, format_date, parse_date};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Validators
// =============================================================================

/// Validates that `value` is not blank and returns it trimmed.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

// =============================================================================
// Date Rules
// =============================================================================

/// A validated arrival/departure pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Number of nights between arrival and departure.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns true when the two stays share at least one night.
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// Checks that departure is strictly after arrival.
pub fn validate_check_out(check_in: NaiveDate, check_out: NaiveDate) -> ValidationResult<StayDates> {
    if check_out <= check_in {
        return Err(ValidationError::CheckOutNotAfterCheckIn { check_in, check_out });
    }
    Ok(StayDates { check_in, check_out })
}

/// Checks the reservation window rules.
///
/// ## Rules
/// - Arrival must be strictly after `today` (tomorrow at the earliest)
/// - Departure must be strictly after arrival
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use hotel_core::validation::validate_reservation_window;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// assert!(validate_reservation_window(d("2024-06-01"), d("2024-06-03"), today).is_err());
/// assert!(validate_reservation_window(d("2024-06-02"), d("2024-06-02"), today).is_err());
/// assert!(validate_reservation_window(d("2024-06-02"), d("2024-06-03"), today).is_ok());
/// ```
pub fn validate_reservation_window(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> ValidationResult<StayDates> {
    if check_in <= today {
        return Err(ValidationError::CheckInNotInFuture { check_in, today });
    }
    validate_check_out(check_in, check_out)
}

/// Parses both reservation dates and applies [`validate_reservation_window`].
pub fn parse_reservation_window(
    reserved_from: &str,
    reserved_to: &str,
    today: NaiveDate,
) -> ValidationResult<StayDates> {
    let check_in = parse_date(booking::RESERVED_FROM, reserved_from)?;
    let check_out = parse_date(booking::RESERVED_TO, reserved_to)?;
    validate_reservation_window(check_in, check_out, today)
}

// =============================================================================
// New Reservation
// =============================================================================

/// Raw input for a new future booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub reserved_from: String,
    pub reserved_to: String,
}

impl NewReservation {
    /// Validates the request and builds the booking record.
    ///
    /// `columns` is the target table's column order; fields of a booking
    /// that the table does not list are appended in their default order.
    /// The room is left unassigned.
    pub fn into_record(self, today: NaiveDate, columns: &[String]) -> ValidationResult<Record> {
        let first_name = validate_required(booking::FIRST_NAME, &self.first_name)?;
        let last_name = validate_required(booking::LAST_NAME, &self.last_name)?;
        let stay = parse_reservation_window(&self.reserved_from, &self.reserved_to, today)?;

        let value_of = |field: &str| -> String {
            match field {
                booking::FIRST_NAME => first_name.clone(),
                booking::LAST_NAME => last_name.clone(),
                booking::PHONE_NUMBER => self.phone_number.trim().to_string(),
                booking::RESERVED_FROM => format_date(stay.check_in),
                booking::RESERVED_TO => format_date(stay.check_out),
                _ => String::new(),
            }
        };

        let mut record = Record::new();
        for column in columns
            .iter()
            .map(String::as_str)
            .filter(|c| booking::COLUMNS.contains(c))
        {
            record.set(column, value_of(column));
        }
        for column in booking::COLUMNS {
            if !record.contains(column) {
                record.set(column, value_of(column));
            }
        }
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
