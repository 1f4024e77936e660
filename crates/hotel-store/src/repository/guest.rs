//! # Guest Repository
//!
//! Lookups over the guest register and the one mutation it allows: moving a
//! guest's check-out date.

use std::path::PathBuf;

use hotel_core::types::{format_date, guest, parse_date};
use hotel_core::validation::validate_check_out;
use hotel_core::{FieldMatch, Record, StayDates};
use tracing::info;

use super::{narrow, TableFile};
use crate::error::{StoreError, StoreResult};
use crate::table::TabularStore;

/// Columns every guest table must have.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    guest::GUEST_ID,
    guest::FIRST_NAME,
    guest::LAST_NAME,
    guest::CHECK_IN_DATE,
    guest::CHECK_OUT_DATE,
];

/// Repository for guest records.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    table: TableFile,
}

impl GuestRepository {
    /// Loads the guest table at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(GuestRepository {
            table: TableFile::open(path, &REQUIRED_COLUMNS)?,
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

    /// Guests whose first name contains `first_name`, ignoring case.
    pub fn search_by_first_name(&self, first_name: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::contains(guest::FIRST_NAME, first_name))
    }

    /// Keeps the guests whose last name equals `last_name`, ignoring case
    /// and surrounding whitespace.
    pub fn narrow_by_last_name<'a>(&self, matches: Vec<&'a Record>, last_name: &str) -> Vec<&'a Record> {
        narrow(matches, &FieldMatch::ignore_case(guest::LAST_NAME, last_name))
    }

    /// Every guest registered under `guest_id`.
    pub fn find_by_id(&self, guest_id: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::exact(guest::GUEST_ID, guest_id.trim()))
    }

    /// Guests arriving on `date` (`YYYY-MM-DD`, compared as text).
    pub fn search_by_check_in(&self, date: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::exact(guest::CHECK_IN_DATE, date.trim()))
    }

    /// Moves the check-out date of the first guest registered under
    /// `guest_id`.
    ///
    /// ## Returns
    /// * `Ok(StayDates)` - The new stay; the table has been rewritten
    /// * `Err(StoreError::NotFound)` - No guest has that id
    /// * `Err(StoreError::Validation)` - `new_check_out` does not parse or
    ///   is not after the stored check-in date
    pub fn change_check_out(&mut self, guest_id: &str, new_check_out: &str) -> StoreResult<StayDates> {
        let guest_id = guest_id.trim();
        let index = self
            .store()
            .position(&FieldMatch::exact(guest::GUEST_ID, guest_id))
            .ok_or_else(|| StoreError::not_found("Guest", guest_id))?;

        let record = self
            .store()
            .get(index)
            .ok_or_else(|| StoreError::not_found("Guest", guest_id))?;
        let check_in = record.date(guest::CHECK_IN_DATE)?;
        let check_out = parse_date(guest::CHECK_OUT_DATE, new_check_out)?;
        let stay = validate_check_out(check_in, check_out)?;

        let check_out_text = format_date(stay.check_out);
        self.table
            .store_mut()
            .update(index, &[(guest::CHECK_OUT_DATE, check_out_text.as_str())])?;
        self.table.commit()?;

        info!(guest_id, check_out = %check_out_text, "Check-out date changed");
        Ok(stay)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
