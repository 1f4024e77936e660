//! # hotel-core: Records and Business Rules for Hotel Desk
//!
//! This crate holds everything about the hotel's tables that can be decided
//! without touching a file: what a row is, how rows are selected, how text
//! fields become dates and amounts, and which inputs are acceptable.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    hotel-cli (terminal menus)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                hotel-store (CSV tables, repositories)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐     │   │
//! │  │   │  record  │  │  query   │  │  types   │  │ validation │     │   │
//! │  │   │  Record  │  │FieldMatch│  │ columns  │  │ date rules │     │   │
//! │  │   │ accessors│  │  all_of  │  │ tiers    │  │ NewReserv. │     │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - The `Record` row type and its typed accessors
//! - [`query`] - Predicates used to select records
//! - [`types`] - Column names, cooperation status, room types, discount tiers
//! - [`money`] - Integer-cent amounts parsed from price text
//! - [`validation`] - Input and date rules applied before mutations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hotel_core::{FieldMatch, Predicate, Record};
//!
//! let company = Record::new()
//!     .with("Company Name", "Northwind Logistics")
//!     .with("Nights Occupied Last Year", "120");
//!
//! assert!(FieldMatch::contains("Company Name", "wind").matches(&company));
//! assert_eq!(company.count("Nights Occupied Last Year").unwrap(), 120);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod query;
pub mod record;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{all_of, FieldMatch, MatchMode, Predicate};
pub use record::Record;
pub use types::{CooperationStatus, DiscountTier, RoomType};
pub use validation::{NewReservation, StayDates};
