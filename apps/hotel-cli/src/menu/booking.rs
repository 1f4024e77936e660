//! Future booking menu.
//!
//! Bookings are addressed by guest first and last name; when several share
//! a name the first one in the table is used.

use std::io::{BufRead, Write};

use hotel_core::types::booking;
use hotel_core::{NewReservation, Record};

use super::{Desk, INVALID_CHOICE};
use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::{CliError, CliResult};

const BOOKING_MENU: [&str; 7] = [
    "Search upcoming guest by name",
    "Search upcoming guest by last name",
    "Search upcoming guests by check-in date",
    "Add upcoming reservation",
    "Modify booking dates",
    "Cancel a booking",
    "Go back",
];

const BOOKING_FIELDS: [(&str, &str); 5] = [
    ("First Name", booking::FIRST_NAME),
    ("Last Name", booking::LAST_NAME),
    ("Phone Number", booking::PHONE_NUMBER),
    ("Reserved From", booking::RESERVED_FROM),
    ("Reserved To", booking::RESERVED_TO),
];

impl<R: BufRead, W: Write> Desk<R, W> {
    pub(super) fn booking_menu(&mut self) -> CliResult<()> {
        loop {
            match self.menu("Booking Operations:", &BOOKING_MENU, "Choose an operation: ")?.as_str() {
                "1" => self.attempt(Self::search_bookings_by_first_name)?,
                "2" => self.attempt(Self::search_bookings_by_last_name)?,
                "3" => self.attempt(Self::search_bookings_by_check_in)?,
                "4" => self.attempt(Self::add_reservation)?,
                "5" => self.attempt(Self::modify_booking_dates)?,
                "6" => self.attempt(Self::cancel_booking)?,
                "7" => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn search_bookings_by_first_name(&mut self) -> CliResult<()> {
        let first_name = self.console.ask("Enter guest first name: ")?;
        let Desk { hotel, console, display, .. } = self;

        let mut matches = hotel.bookings().search_by_first_name(&first_name);
        if matches.len() > 1 {
            console.say(format!(
                "Multiple guests found with the first name '{}'. Please provide the last name.",
                first_name
            ))?;
            let last_name = console.ask("Enter last name: ")?;
            matches = hotel.bookings().narrow_by_last_name(matches, &last_name);
        }

        if matches.is_empty() {
            return console.say(format!("No upcoming guests found with the name '{}'.", first_name));
        }
        for found in matches {
            show_booking(console, display, "Booking Information:", found)?;
        }
        Ok(())
    }

    fn search_bookings_by_last_name(&mut self) -> CliResult<()> {
        let last_name = self.console.ask("Enter guest last name: ")?;
        let Desk { hotel, console, display, .. } = self;

        let mut matches = hotel.bookings().search_by_last_name(&last_name);
        if matches.len() > 1 {
            console.say(format!(
                "Multiple guests found with the last name '{}'. Please provide the first name.",
                last_name
            ))?;
            let first_name = console.ask("Enter first name: ")?;
            matches = hotel.bookings().narrow_by_first_name(matches, &first_name);
        }

        if matches.is_empty() {
            return console.say(format!("No upcoming guests found with the last name '{}'.", last_name));
        }
        for found in matches {
            show_booking(console, display, "Booking Information:", found)?;
        }
        Ok(())
    }

    fn search_bookings_by_check_in(&mut self) -> CliResult<()> {
        let date = self.console.ask("Enter check-in date (YYYY-MM-DD): ")?;
        let Desk { hotel, console, display, .. } = self;

        let matches = hotel.bookings().search_by_check_in(&date);
        if matches.is_empty() {
            return console.say(format!("No upcoming guests found with check-in date {}.", date));
        }
        for found in matches {
            show_booking(console, display, "Booking Information:", found)?;
        }
        Ok(())
    }

    fn add_reservation(&mut self) -> CliResult<()> {
        let request = NewReservation {
            first_name: self.console.ask("Enter guest first name: ")?,
            last_name: self.console.ask("Enter guest last name: ")?,
            phone_number: self.console.ask("Enter guest contact information: ")?,
            reserved_from: self.console.ask("Enter check-in date (YYYY-MM-DD): ")?,
            reserved_to: self.console.ask("Enter check-out date (YYYY-MM-DD): ")?,
        };

        let record = self.hotel.bookings_mut().add_reservation(request, self.today)?;
        show_booking(
            &mut self.console,
            &self.display,
            "Reservation was made successfully with the following details:",
            &record,
        )
    }

    fn modify_booking_dates(&mut self) -> CliResult<()> {
        let first_name = self.console.ask("Enter guest first name: ")?;
        let last_name = self.console.ask("Enter guest last name: ")?;
        let today = self.today;
        let Desk { hotel, console, display, .. } = self;

        let found = hotel
            .bookings()
            .find_by_guest(&first_name, &last_name)
            .ok_or_else(|| booking_not_found(&first_name, &last_name))?;
        show_booking(console, display, "Booking to be modified:", found)?;

        let reserved_from = console.ask("Enter new check-in date (YYYY-MM-DD): ")?;
        let reserved_to = console.ask("Enter new check-out date (YYYY-MM-DD): ")?;
        hotel
            .bookings_mut()
            .modify_dates(&first_name, &last_name, &reserved_from, &reserved_to, today)?;

        let updated = hotel
            .bookings()
            .find_by_guest(&first_name, &last_name)
            .ok_or_else(|| booking_not_found(&first_name, &last_name))?;
        show_booking(
            console,
            display,
            "Booking dates updated successfully. Here are the updated details:",
            updated,
        )
    }

    fn cancel_booking(&mut self) -> CliResult<()> {
        let first_name = self.console.ask("Enter guest first name: ")?;
        let last_name = self.console.ask("Enter guest last name: ")?;
        let Desk { hotel, console, display, .. } = self;

        let found = hotel
            .bookings()
            .find_by_guest(&first_name, &last_name)
            .ok_or_else(|| booking_not_found(&first_name, &last_name))?;
        show_booking(console, display, "Booking to be canceled:", found)?;

        if !console.confirm("Are you sure you want to cancel this booking? (yes/no): ")? {
            return console.say("The booking was not canceled.");
        }
        hotel.bookings_mut().cancel(&first_name, &last_name)?;
        console.say("The booking has been successfully canceled.")
    }
}

/// Prints a booking, with the placeholder text when no room is assigned.
fn show_booking<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    display: &DisplaySettings,
    title: &str,
    record: &Record,
) -> CliResult<()> {
    let room = record
        .get(booking::ROOM_ID)
        .filter(|room| !room.trim().is_empty())
        .unwrap_or(display.room_placeholder.as_str());

    console.blank()?;
    console.say(title)?;
    console.say(format!("Room ID: {}", room))?;
    for (label, field) in BOOKING_FIELDS {
        let value = record.get(field).unwrap_or(display.fallback.as_str());
        console.say(format!("{}: {}", label, value))?;
    }
    Ok(())
}

fn booking_not_found(first_name: &str, last_name: &str) -> CliError {
    CliError::not_found("Booking", &format!("{} {}", first_name.trim(), last_name.trim()))
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{run_script, tables};

    const PLACEHOLDER: &str = "Room ID: The room will be assigned by hotel reservation agents";

    fn saved_bookings(dir: &std::path::Path) -> String {
        std::fs::read_to_string(dir.join("Future booking.csv")).unwrap()
    }

    #[test]
    fn test_search_by_first_name_narrows() {
        let dir = tables();
        let out = run_script(dir.path(), "3\n1\nada\nbyron\n7\n5\n");
        assert!(out.contains("Multiple guests found with the first name 'ada'."));
        assert!(out.contains("Last Name: Byron"));
        assert!(!out.contains("Last Name: Lovelace"));
        assert!(out.contains(PLACEHOLDER));
    }

    #[test]
    fn test_search_by_last_name_and_date() {
        let dir = tables();
        let out = run_script(dir.path(), "3\n2\nturing\n3\n2024-07-01\n3\n2030-01-01\n7\n5\n");
        assert!(out.contains("Room ID: 204"));
        assert!(out.contains("Last Name: Lovelace"));
        assert!(out.contains("No upcoming guests found with check-in date 2030-01-01."));
    }

    #[test]
    fn test_add_reservation() {
        let dir = tables();
        let out = run_script(
            dir.path(),
            "3\n4\nGrace\nHopper\n555-0199\n2024-06-20\n2024-06-25\n7\n5\n",
        );
        assert!(out.contains("Reservation was made successfully with the following details:"));
        assert!(out.contains(PLACEHOLDER));
        assert!(saved_bookings(dir.path()).ends_with("Grace,Hopper,555-0199,2024-06-20,2024-06-25,\n"));
    }

    #[test]
    fn test_add_reservation_rejects_today() {
        let dir = tables();
        let out = run_script(
            dir.path(),
            "3\n4\nGrace\nHopper\n\n2024-06-01\n2024-06-03\n4\n\nHopper\n\n2024-06-20\n2024-06-25\n7\n5\n",
        );
        assert!(out.contains("Error: Check-in date must be from tomorrow onwards"));
        assert!(out.contains("Error: first_name is required"));
        assert!(!saved_bookings(dir.path()).contains("Hopper"));
    }

    #[test]
    fn test_modify_dates() {
        let dir = tables();
        let out = run_script(dir.path(), "3\n5\nalan\nturing\n2024-06-16\n2024-06-18\n7\n5\n");
        assert!(out.contains("Booking to be modified:"));
        assert!(out.contains("Booking dates updated successfully. Here are the updated details:"));
        assert!(out.contains("Reserved From: 2024-06-16"));
        assert!(saved_bookings(dir.path()).contains("Alan,Turing,555-0101,2024-06-16,2024-06-18,204\n"));
    }

    #[test]
    fn test_modify_unknown_booking() {
        let dir = tables();
        let out = run_script(dir.path(), "3\n5\nGrace\nHopper\n7\n5\n");
        assert!(out.contains("Error: Booking not found: Grace Hopper"));
    }

    #[test]
    fn test_cancel_needs_confirmation() {
        let dir = tables();
        let out = run_script(dir.path(), "3\n6\nAda\nByron\nno\n6\nAda\nByron\nyes\n7\n5\n");
        assert!(out.contains("The booking was not canceled."));
        assert!(out.contains("The booking has been successfully canceled."));

        let saved = saved_bookings(dir.path());
        assert!(!saved.contains("Byron"));
        assert!(saved.contains("Ada,Lovelace"));
    }
}
