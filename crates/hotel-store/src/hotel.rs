//! # Hotel Handle
//!
//! Opens the four tables once at startup and hands out their repositories.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hotel Lifecycle                                    │
//! │                                                                         │
//! │  Process start                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TablePaths::in_dir("./data") ← Where the four tables live             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Hotel::open(paths) ← Load every table, check required columns         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  guests   companies  bookings  services │  (held for the session)   │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Menu operations, each mutation rewrites its table              │
//! │       ▼                                                                 │
//! │  Hotel::close() ← Persist anything still dirty                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::StoreResult;
use crate::repository::{BookingRepository, CompanyRepository, GuestRepository, ServiceRepository, TableFile};

/// Default guest table file name.
pub const GUESTS_FILE: &str = "Guest.csv";
/// Default company table file name.
pub const COMPANIES_FILE: &str = "Companies.csv";
/// Default booking table file name.
pub const BOOKINGS_FILE: &str = "Future booking.csv";
/// Default service table file name.
pub const SERVICES_FILE: &str = "Hotel_Services.csv";

// =============================================================================
// Configuration
// =============================================================================

/// Locations of the four tables.
///
/// ## Example
/// ```rust
/// use hotel_store::TablePaths;
///
/// let paths = TablePaths::in_dir("./data").bookings("Bookings 2025.csv");
/// assert!(paths.bookings.ends_with("Bookings 2025.csv"));
/// assert!(paths.guests.ends_with("Guest.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub guests: PathBuf,
    pub companies: PathBuf,
    pub bookings: PathBuf,
    pub services: PathBuf,
    dir: PathBuf,
}

impl TablePaths {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        TablePaths {
            guests: dir.join(GUESTS_FILE),
            companies: dir.join(COMPANIES_FILE),
            bookings: dir.join(BOOKINGS_FILE),
            services: dir.join(SERVICES_FILE),
            dir,
        }
    }

    /// Sets the guest table file name.
    pub fn guests(mut self, file: impl AsRef<Path>) -> Self {
        self.guests = self.dir.join(file);
        self
    }

    /// Sets the company table file name.
    pub fn companies(mut self, file: impl AsRef<Path>) -> Self {
        self.companies = self.dir.join(file);
        self
    }

    /// Sets the booking table file name.
    pub fn bookings(mut self, file: impl AsRef<Path>) -> Self {
        self.bookings = self.dir.join(file);
        self
    }

    /// Sets the service table file name.
    pub fn services(mut self, file: impl AsRef<Path>) -> Self {
        self.services = self.dir.join(file);
        self
    }

    /// Directory the tables live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// =============================================================================
// Hotel
// =============================================================================

/// Every table of the hotel, loaded once per session.
#[derive(Debug, Clone)]
pub struct Hotel {
    guests: GuestRepository,
    companies: CompanyRepository,
    bookings: BookingRepository,
    services: ServiceRepository,
}

impl Hotel {
    /// Loads all four tables.
    ///
    /// ## Returns
    /// * `Ok(Hotel)` - Every table loaded
    /// * `Err(StoreError::Io)` - A table file is missing or unreadable
    /// * `Err(StoreError::Format)` - A table is malformed or lacks a column
    pub fn open(paths: &TablePaths) -> StoreResult<Self> {
        info!(dir = %paths.dir().display(), "Opening hotel tables");

        let hotel = Hotel {
            guests: GuestRepository::open(&paths.guests)?,
            companies: CompanyRepository::open(&paths.companies)?,
            bookings: BookingRepository::open(&paths.bookings)?,
            services: ServiceRepository::open(&paths.services)?,
        };

        info!(
            guests = hotel.guests.table().store().len(),
            companies = hotel.companies.table().store().len(),
            bookings = hotel.bookings.table().store().len(),
            services = hotel.services.table().store().len(),
            "Hotel tables loaded"
        );
        Ok(hotel)
    }

    pub fn guests(&self) -> &GuestRepository {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut GuestRepository {
        &mut self.guests
    }

    pub fn companies(&self) -> &CompanyRepository {
        &self.companies
    }

    pub fn companies_mut(&mut self) -> &mut CompanyRepository {
        &mut self.companies
    }

    pub fn bookings(&self) -> &BookingRepository {
        &self.bookings
    }

    pub fn bookings_mut(&mut self) -> &mut BookingRepository {
        &mut self.bookings
    }

    pub fn services(&self) -> &ServiceRepository {
        &self.services
    }

    /// Ends the session, persisting every table that still holds unsaved
    /// changes.
    ///
    /// Every table is attempted; the first failure is returned.
    pub fn close(mut self) -> StoreResult<()> {
        let tables: [&mut TableFile; 4] = [
            self.guests.table_mut(),
            self.companies.table_mut(),
            self.bookings.table_mut(),
            self.services.table_mut(),
        ];

        let mut first_error = None;
        let mut flushed = 0;
        for table in tables {
            match table.flush() {
                Ok(true) => flushed += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(path = %table.path().display(), error = %e, "Table could not be saved on close");
                    first_error.get_or_insert(e);
                }
            }
        }

        info!(flushed, "Hotel closed");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use hotel_core::NewReservation;

    fn write_tables(dir: &Path) {
        std::fs::write(
            dir.join(GUESTS_FILE),
            "guest_id,first_name,last_name,check_in_date,check_out_date\nG-1,Maria,Lopez,2024-05-28,2024-06-02\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(COMPANIES_FILE),
            "Company Name,Company Type,Nights Occupied Last Year,Cooperation Status\nContoso,Consulting,49,Active\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(BOOKINGS_FILE),
            "first_name,last_name,phone_number,reserved_from,reserved_to,room_id\n",
        )
        .unwrap();
        std::fs::write(dir.join(SERVICES_FILE), "Service Name\nSpa\n").unwrap();
    }

    #[test]
    fn test_open_and_mutate() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());

        let mut hotel = Hotel::open(&TablePaths::in_dir(dir.path())).unwrap();
        assert_eq!(hotel.services().names(), vec!["Spa"]);

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        hotel
            .bookings_mut()
            .add_reservation(
                NewReservation {
                    first_name: "Ada".to_string(),
                    last_name: "Byron".to_string(),
                    reserved_from: "2024-06-02".to_string(),
                    reserved_to: "2024-06-04".to_string(),
                    ..Default::default()
                },
                today,
            )
            .unwrap();
        hotel.close().unwrap();

        let reopened = Hotel::open(&TablePaths::in_dir(dir.path())).unwrap();
        assert!(reopened.bookings().find_by_guest("ada", "byron").is_some());
    }

    #[test]
    fn test_open_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        std::fs::remove_file(dir.path().join(SERVICES_FILE)).unwrap();

        let err = Hotel::open(&TablePaths::in_dir(dir.path())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_custom_file_names() {
        let paths = TablePaths::in_dir("/srv/hotel").guests("Guests 2024.csv");
        assert_eq!(paths.guests, PathBuf::from("/srv/hotel/Guests 2024.csv"));
        assert_eq!(paths.services, PathBuf::from("/srv/hotel/Hotel_Services.csv"));
    }
}
