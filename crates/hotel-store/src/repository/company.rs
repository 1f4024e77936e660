//! # Company Repository
//!
//! Corporate client accounts: search, per-type listings, discount quotes and
//! cooperation status changes.
//!
//! ## Discount Quote
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Nights Occupied Last Year" = 120                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  DiscountTier::for_nights(120) = 12%                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  for each RoomType:  "<Room> Price"  →  original, discounted            │
//! │                      "150.00"        →  150.00,   132.00                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hotel_core::types::company;
use hotel_core::{CooperationStatus, DiscountTier, FieldMatch, Money, Record, RoomType, ValidationError};
use tracing::{info, warn};

use super::TableFile;
use crate::error::{StoreError, StoreResult};
use crate::table::TabularStore;

/// Columns every company table must have.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    company::NAME,
    company::TYPE,
    company::NIGHTS_OCCUPIED,
    company::COOPERATION_STATUS,
];

/// Price of one room type before and after the corporate discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomQuote {
    pub room: RoomType,
    pub original: Money,
    pub discounted: Money,
}

/// Discounted prices for one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountQuote {
    pub company_name: String,
    pub nights: u32,
    pub tier: DiscountTier,
    pub rooms: Vec<RoomQuote>,
}

/// Current status of a company and the statuses it may move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    pub company_name: String,
    /// Stored text, which may not be a known status.
    pub current: String,
    pub options: Vec<CooperationStatus>,
}

/// Repository for company records.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    table: TableFile,
}

impl CompanyRepository {
    /// Loads the company table at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(CompanyRepository {
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

    /// Companies whose name contains `name`, ignoring case.
    pub fn search_by_name(&self, name: &str) -> Vec<&Record> {
        self.store().find_all(&FieldMatch::contains(company::NAME, name))
    }

    /// Distinct company types, sorted.
    pub fn company_types(&self) -> StoreResult<Vec<String>> {
        Ok(self.store().field_values(company::TYPE)?.into_iter().collect())
    }

    /// Companies of exactly `company_type`.
    pub fn by_type(&self, company_type: &str) -> Vec<&Record> {
        self.store()
            .find_all(&FieldMatch::exact(company::TYPE, company_type))
    }

    /// The company named `name`, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.store()
            .find_unique(&FieldMatch::ignore_case(company::NAME, name))
    }

    /// Original and discounted price per room type for `name`.
    ///
    /// ## Returns
    /// * `Ok(DiscountQuote)` - One entry per [`RoomType`], in display order
    /// * `Err(StoreError::NotFound)` - No company has that name
    /// * `Err(StoreError::MissingColumn)` - The table lacks a price column
    /// * `Err(StoreError::InvalidValue)` - Nights or a price is not a number
    pub fn discount_quote(&self, name: &str) -> StoreResult<DiscountQuote> {
        let record = self
            .find_by_name(name)
            .ok_or_else(|| StoreError::not_found("Company", name.trim()))?;

        let price_columns: Vec<&str> = RoomType::ALL.iter().map(|r| r.price_column()).collect();
        self.store().require_columns(&price_columns)?;

        let nights = record.count(company::NIGHTS_OCCUPIED)?;
        let tier = DiscountTier::for_nights(nights);

        let rooms = RoomType::ALL
            .into_iter()
            .map(|room| -> StoreResult<RoomQuote> {
                let original = record.money(room.price_column())?;
                Ok(RoomQuote {
                    room,
                    original,
                    discounted: original.apply_discount(tier),
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(DiscountQuote {
            company_name: record.get(company::NAME).unwrap_or_default().to_string(),
            nights,
            tier,
            rooms,
        })
    }

    /// Statuses the company named `name` can be moved to.
    ///
    /// A stored status that is not recognised offers every status.
    pub fn status_options(&self, name: &str) -> StoreResult<StatusOptions> {
        let record = self
            .find_by_name(name)
            .ok_or_else(|| StoreError::not_found("Company", name.trim()))?;
        let current = record.require(company::COOPERATION_STATUS)?;

        let options = match current.parse::<CooperationStatus>() {
            Ok(status) => status.transitions(),
            Err(_) => {
                warn!(company = name.trim(), status = current, "Unrecognised cooperation status");
                CooperationStatus::ALL.to_vec()
            }
        };

        Ok(StatusOptions {
            company_name: record.get(company::NAME).unwrap_or_default().to_string(),
            current: current.to_string(),
            options,
        })
    }

    /// Sets the cooperation status of the company named `name`.
    ///
    /// Moving a company to the status it already has is rejected.
    pub fn change_status(&mut self, name: &str, status: CooperationStatus) -> StoreResult<()> {
        let options = self.status_options(name)?;
        if !options.options.contains(&status) {
            return Err(ValidationError::NotAllowed {
                field: company::COOPERATION_STATUS.to_string(),
                allowed: options.options.iter().map(|s| s.to_string()).collect(),
            }
            .into());
        }

        let index = self
            .store()
            .position(&FieldMatch::ignore_case(company::NAME, name))
            .ok_or_else(|| StoreError::not_found("Company", name.trim()))?;
        self.table
            .store_mut()
            .update(index, &[(company::COOPERATION_STATUS, status.as_str())])?;
        self.table.commit()?;

        info!(
            company = %options.company_name,
            from = %options.current,
            to = %status,
            "Cooperation status changed"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    const HEADER: &str = "Company Name,Company Type,Nights Occupied Last Year,Cooperation Status,\
Standard Price,Twin Price,Accessible Price,Deluxe Price,Family Deluxe Price,Suite Price\n";

    fn open(rows: &str) -> (TempDir, PathBuf, CompanyRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Companies.csv");
        std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
        let repo = CompanyRepository::open(&path).unwrap();
        (dir, path, repo)
    }

    const ROWS: &str = "Northwind Logistics,Logistics,120,Active,100,110,105,150,180,250.50\n\
Contoso,Consulting,49,Pending,100,110,105,150,180,250\n\
Fabrikam,Logistics,150,oops,100,110,105,150,180,250\n";

    #[test]
    fn test_search_and_types() {
        let (_dir, _path, repo) = open(ROWS);
        assert_eq!(repo.search_by_name("WIND").len(), 1);
        assert_eq!(repo.search_by_name("o").len(), 2);
        assert_eq!(repo.company_types().unwrap(), vec!["Consulting", "Logistics"]);
        assert_eq!(repo.by_type("Logistics").len(), 2);
        assert!(repo.by_type("logistics").is_empty());
    }

    #[test]
    fn test_discount_quote() {
        let (_dir, _path, repo) = open(ROWS);
        let quote = repo.discount_quote("northwind logistics").unwrap();

        assert_eq!(quote.company_name, "Northwind Logistics");
        assert_eq!(quote.nights, 120);
        assert_eq!(quote.tier.percent(), 12);
        assert_eq!(quote.rooms.len(), 6);
        assert_eq!(quote.rooms[0].room, RoomType::Standard);
        assert_eq!(quote.rooms[0].discounted, Money::from_cents(8800));
        assert_eq!(quote.rooms[5].original, Money::from_cents(25050));
        assert_eq!(quote.rooms[5].discounted, Money::from_cents(22044));

        let low = repo.discount_quote("Contoso").unwrap();
        assert_eq!(low.tier.percent(), 5);
    }

    #[test]
    fn test_discount_quote_errors() {
        let (_dir, _path, repo) = open("Bad Co,Retail,many,Active,100,110,105,150,180,250\n");
        assert_eq!(repo.discount_quote("Bad Co").unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(repo.discount_quote("Nobody").unwrap_err().kind(), ErrorKind::NotFound);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Companies.csv");
        std::fs::write(
            &path,
            "Company Name,Company Type,Nights Occupied Last Year,Cooperation Status\nA,B,10,Active\n",
        )
        .unwrap();
        let repo = CompanyRepository::open(&path).unwrap();
        assert_eq!(repo.discount_quote("A").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_status_options_exclude_current() {
        let (_dir, _path, repo) = open(ROWS);
        let options = repo.status_options("contoso").unwrap();
        assert_eq!(options.current, "Pending");
        assert_eq!(
            options.options,
            vec![CooperationStatus::Active, CooperationStatus::Inactive]
        );

        let unknown = repo.status_options("Fabrikam").unwrap();
        assert_eq!(unknown.options.len(), 3);
    }

    #[test]
    fn test_change_status_persists() {
        let (_dir, path, mut repo) = open(ROWS);
        repo.change_status("Contoso", CooperationStatus::Inactive).unwrap();

        let reloaded = CompanyRepository::open(&path).unwrap();
        let record = reloaded.find_by_name("Contoso").unwrap();
        assert_eq!(record.get(company::COOPERATION_STATUS), Some("Inactive"));
    }

    #[test]
    fn test_change_to_current_status_rejected() {
        let (_dir, _path, mut repo) = open(ROWS);
        let err = repo
            .change_status("Northwind Logistics", CooperationStatus::Active)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!repo.table().store().is_dirty());
    }

    #[test]
    fn test_header_only_table() {
        let (_dir, _path, repo) = open("");
        assert!(repo.search_by_name("a").is_empty());
        assert!(repo.company_types().unwrap().is_empty());
    }
}
