//! # Service Repository
//!
//! The hotel's service catalog. Read-only.

use std::path::PathBuf;

use hotel_core::types::service;
use hotel_core::Record;

use super::TableFile;
use crate::error::{StoreError, StoreResult};

/// Repository for the service catalog.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    table: TableFile,
}

impl ServiceRepository {
    /// Loads the service table at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(ServiceRepository {
            table: TableFile::open(path, &[service::NAME])?,
        })
    }

    pub fn table(&self) -> &TableFile {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut TableFile {
        &mut self.table
    }

    /// Every service, in file order.
    pub fn list(&self) -> &[Record] {
        self.table.store().records()
    }

    /// Service names, in file order.
    pub fn names(&self) -> Vec<&str> {
        self.list().iter().filter_map(|r| r.get(service::NAME)).collect()
    }

    /// The service listed at `number`, counting from 1.
    pub fn by_number(&self, number: usize) -> StoreResult<&Record> {
        number
            .checked_sub(1)
            .and_then(|index| self.table.store().get(index))
            .ok_or_else(|| StoreError::not_found("Service", number.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_catalog_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Hotel_Services.csv");
        std::fs::write(
            &path,
            "Service Name,Description,Price\nSpa,\"Sauna, steam room\",40\nAirport Shuttle,Hourly,25\n",
        )
        .unwrap();
        let repo = ServiceRepository::open(&path).unwrap();

        assert_eq!(repo.names(), vec!["Spa", "Airport Shuttle"]);
        assert_eq!(repo.by_number(2).unwrap().get("Price"), Some("25"));
        assert_eq!(repo.by_number(0).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.by_number(3).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.list()[1].get("Description"), Some("Hourly"));
    }
}
