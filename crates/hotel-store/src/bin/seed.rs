//! # Sample Table Generator
//!
//! Writes the four hotel tables with sample rows so the desk can be tried
//! out without real data.
//!
//! ## Usage
//! ```bash
//! # Write into ./data (default)
//! cargo run -p hotel-store --bin seed
//!
//! # Write somewhere else, replacing existing tables
//! cargo run -p hotel-store --bin seed -- --dir /tmp/hotel --force
//! ```
//!
//! ## Generated Tables
//! - `Guest.csv` - guests currently in house
//! - `Companies.csv` - corporate accounts across every discount tier
//! - `Future booking.csv` - reservations starting after today
//! - `Hotel_Services.csv` - the service catalog
//!
//! Dates are relative to the day the tool runs, so fresh bookings always
//! pass the "arrival after today" rule.

use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use hotel_core::types::{booking, company, format_date, guest, service};
use hotel_core::{Record, RoomType};
use hotel_store::hotel::{BOOKINGS_FILE, COMPANIES_FILE, GUESTS_FILE, SERVICES_FILE};
use hotel_store::TabularStore;

/// Writes sample hotel tables.
#[derive(Debug, Parser)]
#[command(name = "seed", about = "Write sample hotel tables")]
struct Args {
    /// Directory to write the tables into
    #[arg(short, long, default_value = "./data")]
    dir: PathBuf,

    /// Replace tables that already exist
    #[arg(short, long)]
    force: bool,
}

/// (guest_id, first, last, arrived days ago, leaves in days, room)
const GUESTS: &[(&str, &str, &str, u64, u64, &str)] = &[
    ("G-101", "Maria", "Lopez", 3, 2, "101"),
    ("G-102", "Mario", "Rossi", 1, 1, "102"),
    ("G-103", "Anna", "Lopez", 1, 4, "204"),
    ("G-104", "Kenji", "Sato", 5, 3, "305"),
    ("G-105", "Mariam", "Khan", 0, 6, "110"),
];

/// (name, type, nights last year, status, standard price)
const COMPANIES: &[(&str, &str, u32, &str, u32)] = &[
    ("Northwind Logistics", "Logistics", 120, "Active", 110),
    ("Contoso Consulting", "Consulting", 49, "Pending", 120),
    ("Fabrikam Industries", "Manufacturing", 150, "Active", 100),
    ("Tailspin Travel", "Travel", 75, "Inactive", 115),
    ("Litware Labs", "Consulting", 12, "Active", 125),
];

/// (first, last, phone, starts in days, nights, room)
const BOOKINGS: &[(&str, &str, &str, u64, u64, &str)] = &[
    ("Ada", "Byron", "555-0100", 3, 2, ""),
    ("Alan", "Turing", "555-0101", 10, 5, "204"),
    ("Grace", "Hopper", "555-0102", 21, 3, ""),
    ("Ada", "Lovelace", "555-0103", 30, 7, ""),
];

/// (name, description, price, hours)
const SERVICES: &[(&str, &str, &str, &str)] = &[
    ("Spa", "Sauna, steam room and massage", "40.00", "09:00-21:00"),
    ("Airport Shuttle", "Door to door, booked a day ahead", "25.00", "05:00-23:00"),
    ("Laundry", "Same day if handed in before 10:00", "12.50", "07:00-18:00"),
    ("Room Service", "Breakfast, lunch and dinner menus", "", "24h"),
    ("Conference Room", "Up to 20 people, projector included", "150.00", "08:00-20:00"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let today = Local::now().date_naive();

    println!("Hotel Desk Sample Tables");
    println!("========================");
    println!("Directory: {}", args.dir.display());
    println!("Today:     {}", format_date(today));
    println!();

    std::fs::create_dir_all(&args.dir)?;

    let tables = [
        (GUESTS_FILE, guests(today)),
        (COMPANIES_FILE, companies()),
        (BOOKINGS_FILE, bookings(today)),
        (SERVICES_FILE, services()),
    ];

    for (file, mut store) in tables {
        let path = args.dir.join(file);
        if path.exists() && !args.force {
            println!("⚠ {} already exists, skipping (use --force to replace)", path.display());
            continue;
        }
        store.persist_to_path(&path)?;
        println!("✓ {} ({} rows)", display_name(&path), store.len());
    }

    Ok(())
}

fn guests(today: NaiveDate) -> TabularStore {
    let columns = [
        guest::GUEST_ID,
        guest::FIRST_NAME,
        guest::LAST_NAME,
        guest::CHECK_IN_DATE,
        guest::CHECK_OUT_DATE,
        "room",
    ];
    let mut store = TabularStore::new(GUESTS_FILE, to_columns(&columns));

    for (id, first, last, arrived, leaves, room) in GUESTS {
        store.insert(
            Record::new()
                .with(guest::GUEST_ID, *id)
                .with(guest::FIRST_NAME, *first)
                .with(guest::LAST_NAME, *last)
                .with(guest::CHECK_IN_DATE, format_date(today - Days::new(*arrived)))
                .with(guest::CHECK_OUT_DATE, format_date(today + Days::new(*leaves)))
                .with("room", *room),
        );
    }
    store
}

fn companies() -> TabularStore {
    let mut columns = vec![
        company::NAME,
        company::TYPE,
        company::NIGHTS_OCCUPIED,
        company::COOPERATION_STATUS,
    ];
    columns.extend(RoomType::ALL.iter().map(|r| r.price_column()));
    let mut store = TabularStore::new(COMPANIES_FILE, to_columns(&columns));

    for (name, kind, nights, status, standard) in COMPANIES {
        let mut record = Record::new()
            .with(company::NAME, *name)
            .with(company::TYPE, *kind)
            .with(company::NIGHTS_OCCUPIED, nights.to_string())
            .with(company::COOPERATION_STATUS, *status);

        // Each room type costs 15 more than the one before it.
        for (step, room) in (0u32..).zip(RoomType::ALL) {
            record.set(room.price_column(), format!("{}.00", standard + step * 15));
        }
        store.insert(record);
    }
    store
}

fn bookings(today: NaiveDate) -> TabularStore {
    let mut store = TabularStore::new(BOOKINGS_FILE, to_columns(&booking::COLUMNS));

    for (first, last, phone, starts_in, nights, room) in BOOKINGS {
        let from = today + Days::new(*starts_in);
        store.insert(
            Record::new()
                .with(booking::FIRST_NAME, *first)
                .with(booking::LAST_NAME, *last)
                .with(booking::PHONE_NUMBER, *phone)
                .with(booking::RESERVED_FROM, format_date(from))
                .with(booking::RESERVED_TO, format_date(from + Days::new(*nights)))
                .with(booking::ROOM_ID, *room),
        );
    }
    store
}

fn services() -> TabularStore {
    let columns = [service::NAME, "Description", "Price", "Opening Hours"];
    let mut store = TabularStore::new(SERVICES_FILE, to_columns(&columns));

    for (name, description, price, hours) in SERVICES {
        store.insert(
            Record::new()
                .with(service::NAME, *name)
                .with("Description", *description)
                .with("Price", *price)
                .with("Opening Hours", *hours),
        );
    }
    store
}

fn to_columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
