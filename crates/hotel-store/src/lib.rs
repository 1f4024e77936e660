//! # hotel-store: Table Storage for Hotel Desk
//!
//! This crate loads the hotel's CSV tables into memory, answers queries over
//! them and writes each table back in full after every accepted change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Data Flow                             │
//! │                                                                         │
//! │  Menu operation (change check-out date)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   hotel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Hotel      │    │ Repositories  │    │ TabularStore │  │   │
//! │  │   │  (hotel.rs)   │    │               │    │  (table.rs)  │  │   │
//! │  │   │               │    │ GuestRepo     │    │              │  │   │
//! │  │   │ TablePaths    │───►│ CompanyRepo   │───►│ find_all     │  │   │
//! │  │   │ open / close  │    │ BookingRepo   │    │ update       │  │   │
//! │  │   │               │    │ ServiceRepo   │    │ persist      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────┬───────┘  │   │
//! │  └─────────────────────────────────────────────────────┼──────────┘   │
//! │                                              codec.rs  │               │
//! │  ┌─────────────────────────────────────────────────────▼───────────┐   │
//! │  │  Guest.csv   Companies.csv   Future booking.csv   Hotel_Services│   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - The generic in-memory table
//! - [`repository`] - Guest, company, booking and service adapters
//! - [`hotel`] - Table locations and the session handle
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hotel_store::{Hotel, TablePaths};
//!
//! let mut hotel = Hotel::open(&TablePaths::in_dir("./data"))?;
//!
//! for guest in hotel.guests().search_by_first_name("mar") {
//!     println!("{:?}", guest.get("guest_id"));
//! }
//! hotel.guests_mut().change_check_out("G-104", "2024-06-09")?;
//!
//! hotel.close()?;
//! # Ok::<(), hotel_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod codec;
pub mod error;
pub mod hotel;
pub mod repository;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorKind, StoreError, StoreResult};
pub use hotel::{Hotel, TablePaths};
pub use table::TabularStore;

// Repository re-exports for convenience
pub use repository::{
    BookingRepository, CompanyRepository, DiscountQuote, GuestRepository, RoomQuote,
    ServiceRepository, StatusOptions, TableFile,
};
