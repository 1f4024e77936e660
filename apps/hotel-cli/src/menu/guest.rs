//! Guest information menu.

use std::io::{BufRead, Write};

use hotel_core::types::format_date;

use super::{show_record, Desk, INVALID_CHOICE};
use crate::error::CliResult;

const GUEST_MENU: [&str; 5] = [
    "Search guest by name",
    "Search guest by ID",
    "Search guests by check-in date",
    "Change check-out date",
    "Go back",
];

impl<R: BufRead, W: Write> Desk<R, W> {
    pub(super) fn guest_menu(&mut self) -> CliResult<()> {
        loop {
            match self.menu("Guest Operations:", &GUEST_MENU, "Choose an operation: ")?.as_str() {
                "1" => self.attempt(Self::search_guests_by_name)?,
                "2" => self.attempt(Self::search_guest_by_id)?,
                "3" => self.attempt(Self::search_guests_by_check_in)?,
                "4" => self.attempt(Self::change_guest_check_out)?,
                "5" => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn search_guests_by_name(&mut self) -> CliResult<()> {
        let first_name = self.console.ask("Enter guest first name: ")?;
        let Desk { hotel, console, .. } = self;

        let mut matches = hotel.guests().search_by_first_name(&first_name);
        if matches.len() > 1 {
            console.say(format!(
                "Multiple guests found with the name '{}'. Please provide the last name.",
                first_name
            ))?;
            let last_name = console.ask("Enter last name: ")?;
            matches = hotel.guests().narrow_by_last_name(matches, &last_name);
        }

        if matches.is_empty() {
            return console.say(format!("No guests found with the name '{}'.", first_name));
        }
        for guest in matches {
            show_record(console, "Guest Information:", guest)?;
        }
        Ok(())
    }

    fn search_guest_by_id(&mut self) -> CliResult<()> {
        let guest_id = self.console.ask("Enter guest ID: ")?;
        let Desk { hotel, console, .. } = self;

        let matches = hotel.guests().find_by_id(&guest_id);
        if matches.is_empty() {
            return console.say(format!("No guest found with ID '{}'.", guest_id));
        }
        for guest in matches {
            show_record(console, "Guest Information:", guest)?;
        }
        Ok(())
    }

    fn search_guests_by_check_in(&mut self) -> CliResult<()> {
        let date = self.console.ask("Enter check-in date (YYYY-MM-DD): ")?;
        let Desk { hotel, console, .. } = self;

        let matches = hotel.guests().search_by_check_in(&date);
        if matches.is_empty() {
            return console.say(format!("No guests found with check-in date {}.", date));
        }
        for guest in matches {
            show_record(console, "Guest Information:", guest)?;
        }
        Ok(())
    }

    fn change_guest_check_out(&mut self) -> CliResult<()> {
        let guest_id = self.console.ask("Enter guest ID: ")?;
        let new_date = self.console.ask("Enter new check-out date (YYYY-MM-DD): ")?;

        let stay = self.hotel.guests_mut().change_check_out(&guest_id, &new_date)?;
        self.console.say(format!(
            "Check-out date updated to {} ({} nights).",
            format_date(stay.check_out),
            stay.nights()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{run_script, tables};

    #[test]
    fn test_search_by_name_asks_for_last_name() {
        let dir = tables();
        let out = run_script(dir.path(), "1\n1\nmari\nlopez\n5\n5\n");
        assert!(out.contains("Multiple guests found with the name 'mari'. Please provide the last name."));
        assert!(out.contains("guest_id: G-1"));
        assert!(!out.contains("guest_id: G-2"));
    }

    #[test]
    fn test_search_by_id_and_check_in() {
        let dir = tables();
        let out = run_script(dir.path(), "1\n2\nG-3\n3\n2024-05-30\n2\nG-9\n5\n5\n");
        assert_eq!(out.matches("first_name: Anna").count(), 2);
        assert!(out.contains("first_name: Mariam"));
        assert!(out.contains("No guest found with ID 'G-9'."));
    }

    #[test]
    fn test_change_check_out_is_saved() {
        let dir = tables();
        let out = run_script(dir.path(), "1\n4\nG-1\n2024-06-05\n5\n5\n");
        assert!(out.contains("Check-out date updated to 2024-06-05 (8 nights)."));

        let saved = std::fs::read_to_string(dir.path().join("Guest.csv")).unwrap();
        assert!(saved.contains("G-1,Maria,Lopez,2024-05-28,2024-06-05\n"));
    }

    #[test]
    fn test_change_check_out_rejects_early_date() {
        let dir = tables();
        let out = run_script(dir.path(), "1\n4\nG-1\n2024-05-27\n4\nG-9\n2024-06-05\n5\n5\n");
        assert!(out.contains("Error: Check-out date must be after the check-in date"));
        assert!(out.contains("Error: Guest not found: G-9"));

        let saved = std::fs::read_to_string(dir.path().join("Guest.csv")).unwrap();
        assert!(saved.contains("G-1,Maria,Lopez,2024-05-28,2024-06-02\n"));
    }
}
