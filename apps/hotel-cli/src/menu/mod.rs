//! # Menus
//!
//! The interactive front desk: a main menu and one sub-menu per table.
//!
//! ## Menu Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Main menu                                                              │
//! │  ├── 1. Guests     search by name / ID / check-in, change check-out    │
//! │  ├── 2. Companies  search by name / type, discount, cooperation status │
//! │  ├── 3. Bookings   search, add, modify dates, cancel                   │
//! │  ├── 4. Services   list, show one                                      │
//! │  └── 5. Exit                                                           │
//! │                                                                         │
//! │  Every operation runs through `attempt`: a failed operation prints     │
//! │  its message and the menu comes back. End of input leaves the menus.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod booking;
mod company;
mod guest;
mod service;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use hotel_core::Record;
use hotel_store::Hotel;
use tracing::{debug, warn};

use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::{CliResult, ErrorCode};

/// Printed for any menu answer that is not one of the listed numbers.
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

const MAIN_TITLE: &str = "WELCOME TO HOTEL DESK\nHotel Management System:";

const MAIN_MENU: [&str; 5] = [
    "Work with Guest Information",
    "Work with Company Information",
    "Track Bookings",
    "Manage Services",
    "Exit",
];

/// One desk session: the open hotel plus the terminal it is driven from.
pub struct Desk<R, W> {
    hotel: Hotel,
    console: Console<R, W>,
    display: DisplaySettings,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Desk<R, W> {
    /// Creates a session. `today` is the business date for booking rules.
    pub fn new(hotel: Hotel, console: Console<R, W>, display: DisplaySettings, today: NaiveDate) -> Self {
        Desk {
            hotel,
            console,
            display,
            today,
        }
    }

    /// Runs the main menu until the clerk exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            let choice = match self.menu(MAIN_TITLE, &MAIN_MENU, "Choose an option: ") {
                Ok(choice) => choice,
                Err(e) if e.code == ErrorCode::EndOfInput => break,
                Err(e) => return Err(e),
            };

            let outcome = match choice.as_str() {
                "1" => self.guest_menu(),
                "2" => self.company_menu(),
                "3" => self.booking_menu(),
                "4" => self.service_menu(),
                "5" => break,
                _ => self.console.say(INVALID_CHOICE),
            };
            match outcome {
                Err(e) if e.code == ErrorCode::EndOfInput => break,
                other => other?,
            }
        }

        self.console.say("Thank you for using Hotel Desk!")
    }

    /// Ends the session and hands back the hotel for closing.
    pub fn into_hotel(self) -> Hotel {
        self.hotel
    }

    /// Shows a numbered menu and reads the raw answer.
    fn menu(&mut self, title: &str, entries: &[&str], prompt: &str) -> CliResult<String> {
        self.console.blank()?;
        self.console.say(title)?;
        for (number, entry) in entries.iter().enumerate() {
            self.console.say(format!("{}. {}", number + 1, entry))?;
        }
        self.console.ask(prompt)
    }

    /// Runs one operation, reporting a recoverable failure instead of
    /// returning it.
    fn attempt(&mut self, operation: impl FnOnce(&mut Self) -> CliResult<()>) -> CliResult<()> {
        match operation(self) {
            Err(e) if !e.is_fatal() => {
                warn!(code = ?e.code, message = %e.message, "Operation failed");
                self.console.say(format!("Error: {}", e.message))
            }
            other => {
                debug!("Operation finished");
                other
            }
        }
    }
}

// =============================================================================
// Record Display
// =============================================================================

/// Prints every field of `record` in column order.
fn show_record<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str, record: &Record) -> CliResult<()> {
    console.blank()?;
    console.say(title)?;
    for (field, value) in record.iter() {
        console.say(format!("{}: {}", field, value))?;
    }
    console.blank()
}

/// Prints the listed fields, using the fallback text for absent ones.
fn show_fields<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    display: &DisplaySettings,
    title: &str,
    record: &Record,
    fields: &[(&str, &str)],
) -> CliResult<()> {
    console.blank()?;
    console.say(title)?;
    for (label, field) in fields {
        let value = record.get(field).unwrap_or(display.fallback.as_str());
        console.say(format!("{}: {}", label, value))?;
    }
    Ok(())
}

// =============================================================================
// Test Fixture
// =============================================================================
