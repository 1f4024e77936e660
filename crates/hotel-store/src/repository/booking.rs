//! # Booking Repository
//!
//! Future reservations, the only table with a full create / modify / cancel
//! lifecycle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Lifecycle                                │
//! │                                                                         │
//! │   add_reservation()          modify_dates()            cancel()        │
//! │        │                          │                        │            │
//! │        ▼                          ▼                        ▼            │
//! │   NewReservation            parse + check dates      find (first,last) │
//! │   .into_record(today)       reserved_from > today         │            │
//! │        │                    reserved_to > from            ▼            │
//! │        ▼                          │                   remove()         │
//! │   check_conforms()                ▼                        │            │
//! │   overlap warning            update()                      │            │
//! │        │                          │                        │            │
//! │        ▼                          ▼                        ▼            │
//! │   insert()  ───────────────► commit (rewrite file) ◄───────┘            │
//! │                                                                         │
//! │  room_id starts empty; staff assign rooms outside this program.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use hotel_core::query::full_name;
use hotel_core::types::{booking, format_date};
use hotel_core::validation::parse_reservation_window;
use hotel_core::{FieldMatch, NewReservation, Predicate, Record, StayDates};
use tracing::{info, warn};

use super::{narrow, TableFile};
use crate::error::{StoreError, StoreResult};
use crate::table::TabularStore;

/// Repository for future bookings.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    table: TableFile,
}

impl BookingRepository {
    /// Loads the booking table at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(BookingRepository {
            table: TableFile::open(path, &booking::COLUMNS)?,
        })
    }

    pub fn table(&self) -> &TableFile {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut TableFile {
        &mut self.table
    }

    fn store(&self) -> &TabularStore {
        self.table.store()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Bookings whose first name contains `first_name`, ignoring case.
    pub fn search_by_first_name(&self, first_name: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::contains(booking::FIRST_NAME, first_name))
    }

    /// Bookings whose last name contains `last_name`, ignoring case.
    pub fn search_by_last_name(&self, last_name: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::contains(booking::LAST_NAME, last_name))
    }

    /// Keeps the bookings whose first name equals `first_name`, ignoring case.
    pub fn narrow_by_first_name<'a>(&self, matches: Vec<&'a Record>, first_name: &str) -> Vec<&'a Record> {
        narrow(matches, &FieldMatch::ignore_case(booking::FIRST_NAME, first_name))
    }

    /// Keeps the bookings whose last name equals `last_name`, ignoring case.
    pub fn narrow_by_last_name<'a>(&self, matches: Vec<&'a Record>, last_name: &str) -> Vec<&'a Record> {
        narrow(matches, &FieldMatch::ignore_case(booking::LAST_NAME, last_name))
    }

    /// Bookings starting on `date` (compared as text).
    pub fn search_by_check_in(&self, date: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::exact(booking::RESERVED_FROM, date.trim()))
    }

    /// The first booking held by `first_name last_name`, ignoring case.
    pub fn find_by_guest(&self, first_name: &str, last_name: &str) -> Option<&Record> {
        self.store().find_unique(&guest_name(first_name, last_name))
    }

    /// Bookings under the same guest name whose stay shares a night with
    /// `stay`. Rows with unreadable dates are skipped.
    pub fn overlapping_bookings(&self, first_name: &str, last_name: &str, stay: &StayDates) -> Vec<&Record> {
        let same_guest = guest_name(first_name, last_name);
        self.store().find_all(&|record: &Record| {
            same_guest.matches(record) && stored_stay(record).is_some_and(|s| s.overlaps(stay))
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates and stores a new reservation.
    ///
    /// The room is left unassigned. A reservation that overlaps another one
    /// under the same guest name is accepted and logged.
    ///
    /// ## Returns
    /// * `Ok(Record)` - The stored booking; the table has been rewritten
    /// * `Err(StoreError::Validation)` - Missing name, bad date or date order
    /// * `Err(StoreError::Schema)` - The booking does not fit the table
    pub fn add_reservation(&mut self, request: NewReservation, today: NaiveDate) -> StoreResult<Record> {
        let record = request.into_record(today, &self.store().columns())?;
        self.store().check_conforms(&record)?;

        let first_name = record.require(booking::FIRST_NAME)?;
        let last_name = record.require(booking::LAST_NAME)?;
        let stay = StayDates {
            check_in: record.date(booking::RESERVED_FROM)?,
            check_out: record.date(booking::RESERVED_TO)?,
        };
        let conflicts = self.overlapping_bookings(first_name, last_name, &stay).len();
        if conflicts > 0 {
            warn!(
                first_name,
                last_name,
                conflicts,
                "New reservation overlaps an existing booking for the same guest"
            );
        }

        self.table.store_mut().insert(record.clone());
        self.table.commit()?;

        info!(
            first_name = record.get(booking::FIRST_NAME).unwrap_or_default(),
            last_name = record.get(booking::LAST_NAME).unwrap_or_default(),
            reserved_from = %format_date(stay.check_in),
            reserved_to = %format_date(stay.check_out),
            "Reservation added"
        );
        Ok(record)
    }

    /// Moves the dates of the first booking held by `first_name last_name`.
    ///
    /// The same rules as a new reservation apply: arrival after `today`,
    /// departure after arrival.
    pub fn modify_dates(
        &mut self,
        first_name: &str,
        last_name: &str,
        reserved_from: &str,
        reserved_to: &str,
        today: NaiveDate,
    ) -> StoreResult<StayDates> {
        let index = self
            .store()
            .position(&guest_name(first_name, last_name))
            .ok_or_else(|| not_found(first_name, last_name))?;
        let stay = parse_reservation_window(reserved_from, reserved_to, today)?;

        let from = format_date(stay.check_in);
        let to = format_date(stay.check_out);
        self.table.store_mut().update(
            index,
            &[(booking::RESERVED_FROM, from.as_str()), (booking::RESERVED_TO, to.as_str())],
        )?;
        self.table.commit()?;

        info!(first_name, last_name, reserved_from = %from, reserved_to = %to, "Reservation dates changed");
        Ok(stay)
    }

    /// Removes the first booking held by `first_name last_name`.
    ///
    /// Returns the removed booking.
    pub fn cancel(&mut self, first_name: &str, last_name: &str) -> StoreResult<Record> {
        let record = self
            .find_by_guest(first_name, last_name)
            .cloned()
            .ok_or_else(|| not_found(first_name, last_name))?;

        self.table.store_mut().remove(&record);
        self.table.commit()?;

        info!(first_name, last_name, "Reservation cancelled");
        Ok(record)
    }
}

fn guest_name(first_name: &str, last_name: &str) -> impl Predicate {
    full_name(booking::FIRST_NAME, first_name, booking::LAST_NAME, last_name)
}

fn stored_stay(record: &Record) -> Option<StayDates> {
    Some(StayDates {
        check_in: record.date(booking::RESERVED_FROM).ok()?,
        check_out: record.date(booking::RESERVED_TO).ok()?,
    })
}

fn not_found(first_name: &str, last_name: &str) -> StoreError {
    StoreError::not_found("Booking", format!("{} {}", first_name.trim(), last_name.trim()))
}

// =============================================================================
// Unit Tests
// =============================================================================
