//! # Hotel Desk Library
//!
//! Core library for the hotel back-office terminal.
//! `run` loads the configuration, opens the tables and drives the menus.
//!
//! ## Module Organization
//! ```text
//! hotel_cli/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── config.rs       ◄─── hotel.toml, environment overrides
//! ├── console.rs      ◄─── Prompt/answer over any reader and writer
//! ├── error.rs        ◄─── CLI error type for menu operations
//! └── menu/
//!     ├── mod.rs      ◄─── Desk session, main menu, record display
//!     ├── guest.rs    ◄─── Guest searches, check-out change
//!     ├── company.rs  ◄─── Company searches, discounts, status
//!     ├── booking.rs  ◄─── Future bookings
//!     └── service.rs  ◄─── Hotel services
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use hotel_store::Hotel;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::HotelConfig;
use console::Console;
use menu::Desk;

/// Startup options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file; the platform default is used when absent.
    pub config: Option<PathBuf>,

    /// Overrides the configured data directory.
    pub data_dir: Option<PathBuf>,

    /// Business date; the local date when absent.
    pub today: Option<NaiveDate>,
}

/// Runs one desk session on the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Desk Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr, RUST_LOG overrides                  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → hotel.toml → HOTEL_* variables → --data-dir            │
/// │                                                                         │
/// │  3. Open Tables ──────────────────────────────────────────────────────► │
/// │     • Guests, companies, bookings, services; columns checked            │
/// │                                                                         │
/// │  4. Run Menus ────────────────────────────────────────────────────────► │
/// │     • stdin/stdout until Exit or end of input                           │
/// │                                                                         │
/// │  5. Close ────────────────────────────────────────────────────────────► │
/// │     • Tables with unsaved changes are written once more                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(options: RunOptions) -> anyhow::Result<()> {
    init_tracing();

    let mut config = HotelConfig::load(options.config).context("Failed to load desk configuration")?;
    if let Some(dir) = options.data_dir {
        config.data.dir = dir;
    }
    let today = options.today.unwrap_or_else(|| Local::now().date_naive());
    info!(data_dir = ?config.data.dir, %today, "Starting Hotel Desk");

    let paths = config.table_paths();
    let hotel = Hotel::open(&paths)
        .with_context(|| format!("Failed to open hotel tables in {}", paths.dir().display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut desk = Desk::new(hotel, console, config.display, today);
    let outcome = desk.run();

    // Close even when the terminal failed so pending edits reach disk.
    desk.into_hotel().close().context("Failed to save hotel tables")?;
    outcome?;

    info!("Hotel Desk closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the menus.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotel_store=trace` - Show trace for the table layer only
/// - Default: warnings, plus info from the hotel crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,hotel_cli=info,hotel_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
