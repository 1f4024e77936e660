//! # Repository Module
//!
//! Per-domain adapters over [`TabularStore`].
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Menu                                                                  │
//! │       │                                                                 │
//! │       │  hotel.bookings_mut().cancel("Ada", "Byron")                   │
//! │       ▼                                                                 │
//! │  BookingRepository                                                     │
//! │  ├── picks the predicate (FieldMatch, full_name, ...)                  │
//! │  ├── applies the call-site rules (hotel-core validation)               │
//! │  └── calls the store primitive (find_all / update / insert / remove)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TableFile                                                             │
//! │  └── TabularStore + path, rewritten after every accepted mutation      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Future booking.csv                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`GuestRepository`] - Guest search and check-out changes
//! - [`CompanyRepository`] - Company search, discount quotes, status changes
//! - [`BookingRepository`] - Future booking lifecycle
//! - [`ServiceRepository`] - Read-only service catalog

pub mod booking;
pub mod company;
pub mod guest;
pub mod service;

pub use booking::BookingRepository;
pub use company::{CompanyRepository, DiscountQuote, RoomQuote, StatusOptions};
pub use guest::GuestRepository;
pub use service::ServiceRepository;

use std::path::{Path, PathBuf};

use hotel_core::{Predicate, Record};
use tracing::{error, info};

use crate::error::StoreResult;
use crate::table::TabularStore;

/// A store together with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct TableFile {
    store: TabularStore,
    path: PathBuf,
}

impl TableFile {
    /// Loads the table at `path` and checks that `required` columns exist.
    pub fn open(path: impl Into<PathBuf>, required: &[&str]) -> StoreResult<Self> {
        let path = path.into();
        let store = TabularStore::load_from_path(&path)?;
        store.require_columns(required)?;
        Ok(TableFile { store, path })
    }

    /// The in-memory table.
    pub fn store(&self) -> &TabularStore {
        &self.store
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn store_mut(&mut self) -> &mut TabularStore {
        &mut self.store
    }

    /// Rewrites the backing file from memory.
    ///
    /// On failure the in-memory change stays applied and the store stays
    /// dirty.
    pub(crate) fn commit(&mut self) -> StoreResult<()> {
        self.store.persist_to_path(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Persist failed; change is held in memory only");
            e
        })
    }

    /// Persists the table if it holds unsaved changes.
    ///
    /// Returns true when a write happened.
    pub fn flush(&mut self) -> StoreResult<bool> {
        if !self.store.is_dirty() {
            return Ok(false);
        }
        info!(path = %self.path.display(), "Flushing unsaved changes");
        self.commit()?;
        Ok(true)
    }
}

/// Keeps only the `matches` that also satisfy `predicate`.
///
/// Used to disambiguate a name search once it returned several records.
pub fn narrow<'a, P: Predicate + ?Sized>(matches: Vec<&'a Record>, predicate: &P) -> Vec<&'a Record> {
    matches.into_iter().filter(|r| predicate.matches(r)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use hotel_core::FieldMatch;

    #[test]
    fn test_open_checks_required_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Hotel_Services.csv");
        std::fs::write(&path, "Name,Price\nSpa,40\n").unwrap();

        let err = TableFile::open(&path, &["Service Name"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("Name, Price"));
    }

    #[test]
    fn test_flush_only_when_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let mut table = TableFile::open(&path, &["a"]).unwrap();
        assert!(!table.flush().unwrap());

        table.store_mut().update(0, &[("b", "3")]).unwrap();
        assert!(table.flush().unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,3\n");
    }

    #[test]
    fn test_failed_commit_keeps_change_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "a\n1\n").unwrap();

        let mut table = TableFile::open(&path, &[]).unwrap();
        table.path = dir.path().join("missing").join("t.csv");
        table.store_mut().update(0, &[("a", "2")]).unwrap();

        assert_eq!(table.commit().unwrap_err().kind(), ErrorKind::Io);
        assert_eq!(table.store().get(0).unwrap().get("a"), Some("2"));
        assert!(table.store().is_dirty());
    }

    #[test]
    fn test_narrow() {
        let a = Record::from_pairs([("first_name", "Maria"), ("last_name", "Lopez")]);
        let b = Record::from_pairs([("first_name", "Mariam"), ("last_name", "Khan")]);
        let narrowed = narrow(vec![&a, &b], &FieldMatch::ignore_case("last_name", " khan "));
        assert_eq!(narrowed, vec![&b]);
    }
}
