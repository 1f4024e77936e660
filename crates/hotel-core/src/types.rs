//! # Domain Types
//!
//! Column names and typed values for the four hotel tables.
//!
//! ## Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Persisted Tables                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │     Guests      │   │      Companies       │   │    Bookings     │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  guest_id       │   │  Company Name        │   │  first_name     │  │
//! │  │  first_name     │   │  Company Type        │   │  last_name      │  │
//! │  │  last_name      │   │  Nights Occupied …   │   │  phone_number   │  │
//! │  │  check_in_date  │   │  Cooperation Status  │   │  reserved_from  │  │
//! │  │  check_out_date │   │  six * Price columns │   │  reserved_to    │  │
//! │  │  …              │   │                      │   │  room_id        │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    Services     │  Every value is text on disk. Dates, counts and   │
//! │  │  ─────────────  │  prices are parsed on demand through the helpers  │
//! │  │  Service Name   │  in this module and in `money`.                   │
//! │  │  …              │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ValidationError;

// =============================================================================
// Column Names
// =============================================================================

/// Columns of the guest table.
pub mod guest {
    pub const GUEST_ID: &str = "guest_id";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const CHECK_IN_DATE: &str = "check_in_date";
    pub const CHECK_OUT_DATE: &str = "check_out_date";
}

/// Columns of the company table.
pub mod company {
    pub const NAME: &str = "Company Name";
    pub const TYPE: &str = "Company Type";
    pub const NIGHTS_OCCUPIED: &str = "Nights Occupied Last Year";
    pub const COOPERATION_STATUS: &str = "Cooperation Status";
}

/// Columns of the future-booking table.
pub mod booking {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const RESERVED_FROM: &str = "reserved_from";
    pub const RESERVED_TO: &str = "reserved_to";
    pub const ROOM_ID: &str = "room_id";

    /// Field order of a freshly created reservation.
    pub const COLUMNS: [&str; 6] = [
        FIRST_NAME,
        LAST_NAME,
        PHONE_NUMBER,
        RESERVED_FROM,
        RESERVED_TO,
        ROOM_ID,
    ];
}

/// Columns of the hotel-service table.
pub mod service {
    pub const NAME: &str = "Service Name";
}

// =============================================================================
// Dates
// =============================================================================

/// On-disk date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` value, naming `field` in the error.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' is not a date in YYYY-MM-DD form", text.trim()),
        }
    })
}

/// Formats a date the way it is stored.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// =============================================================================
// Cooperation Status
// =============================================================================

/// State of a corporate account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooperationStatus {
    Active,
    Inactive,
    Pending,
}

impl CooperationStatus {
    /// Every status, in menu order.
    pub const ALL: [CooperationStatus; 3] = [
        CooperationStatus::Active,
        CooperationStatus::Inactive,
        CooperationStatus::Pending,
    ];

    /// Text written to the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            CooperationStatus::Active => "Active",
            CooperationStatus::Inactive => "Inactive",
            CooperationStatus::Pending => "Pending",
        }
    }

    /// Statuses an account can be moved to from `self`.
    pub fn transitions(&self) -> Vec<CooperationStatus> {
        Self::ALL.into_iter().filter(|s| s != self).collect()
    }
}

impl fmt::Display for CooperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CooperationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(CooperationStatus::Active),
            "inactive" => Ok(CooperationStatus::Inactive),
            "pending" => Ok(CooperationStatus::Pending),
            _ => Err(ValidationError::NotAllowed {
                field: company::COOPERATION_STATUS.to_string(),
                allowed: Self::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Room Types
// =============================================================================

/// Room categories with a corporate price column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    Standard,
    Twin,
    Accessible,
    Deluxe,
    FamilyDeluxe,
    Suite,
}

impl RoomType {
    /// Every room type, in display order.
    pub const ALL: [RoomType; 6] = [
        RoomType::Standard,
        RoomType::Twin,
        RoomType::Accessible,
        RoomType::Deluxe,
        RoomType::FamilyDeluxe,
        RoomType::Suite,
    ];

    /// Name of the price column in the company table.
    pub fn price_column(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Price",
            RoomType::Twin => "Twin Price",
            RoomType::Accessible => "Accessible Price",
            RoomType::Deluxe => "Deluxe Price",
            RoomType::FamilyDeluxe => "Family Deluxe Price",
            RoomType::Suite => "Suite Price",
        }
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// Corporate discount in basis points (1 bp = 0.01%).
///
/// ## Tiers
/// ```text
/// nights occupied last year   discount
/// ─────────────────────────   ────────
///            0 ..  49            5%
///           50 ..  99           10%
///          100 .. 149           12%
///          150 ..               15%
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscountTier(u32);

impl DiscountTier {
    /// Picks the tier for a company's yearly occupancy.
    pub const fn for_nights(nights: u32) -> Self {
        let bps = if nights < 50 {
            500
        } else if nights < 100 {
            1000
        } else if nights < 150 {
            1200
        } else {
            1500
        };
        DiscountTier(bps)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the discount as a whole percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_tier_boundaries() {
        assert_eq!(DiscountTier::for_nights(0).percent(), 5);
        assert_eq!(DiscountTier::for_nights(49).percent(), 5);
        assert_eq!(DiscountTier::for_nights(50).percent(), 10);
        assert_eq!(DiscountTier::for_nights(99).percent(), 10);
        assert_eq!(DiscountTier::for_nights(100).percent(), 12);
        assert_eq!(DiscountTier::for_nights(149).percent(), 12);
        assert_eq!(DiscountTier::for_nights(150).percent(), 15);
        assert_eq!(DiscountTier::for_nights(10_000).percent(), 15);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "active".parse::<CooperationStatus>().unwrap(),
            CooperationStatus::Active
        );
        assert_eq!(
            " Pending ".parse::<CooperationStatus>().unwrap(),
            CooperationStatus::Pending
        );
        assert!("Suspended".parse::<CooperationStatus>().is_err());
    }

    #[test]
    fn test_status_transitions_exclude_current() {
        assert_eq!(
            CooperationStatus::Inactive.transitions(),
            vec![CooperationStatus::Active, CooperationStatus::Pending]
        );
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("reserved_from", "2024-06-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(format_date(date), "2024-06-02");

        assert!(parse_date("reserved_from", "02/06/2024").is_err());
        assert!(parse_date("reserved_from", "2024-02-30").is_err());
    }

    #[test]
    fn test_room_price_columns() {
        let columns: Vec<_> = RoomType::ALL.iter().map(|r| r.price_column()).collect();
        assert_eq!(columns.len(), 6);
        assert!(columns.iter().all(|c| c.ends_with(" Price")));
    }
}
