//! # Hotel Desk Entry Point
//!
//! ```text
//! hotel-desk [--config hotel.toml] [--data-dir ./data] [--today 2024-06-01]
//! ```
//!
//! The setup lives in lib.rs so the menus can be tested without a terminal.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use hotel_cli::RunOptions;
use hotel_core::types::parse_date;

/// Hotel back-office menu over the guest, company, booking and service
/// tables.
#[derive(Debug, Parser)]
#[command(name = "hotel-desk", version, about)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the CSV tables
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Business date (YYYY-MM-DD) used for booking rules
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(text: &str) -> Result<NaiveDate, String> {
    parse_date("today", text).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hotel_cli::run(RunOptions {
        config: cli.config,
        data_dir: cli.data_dir,
        today: cli.today,
    })
}
