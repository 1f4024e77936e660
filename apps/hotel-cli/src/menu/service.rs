//! Hotel services menu.

use std::io::{BufRead, Write};

use hotel_core::types::service;

use super::{show_record, Desk, INVALID_CHOICE};
use crate::error::CliResult;

const SERVICE_MENU: [&str; 3] = ["See the list of hotel services", "Get specific service information", "Go back"];

impl<R: BufRead, W: Write> Desk<R, W> {
    pub(super) fn service_menu(&mut self) -> CliResult<()> {
        loop {
            match self.menu("Service Operations:", &SERVICE_MENU, "Choose an operation: ")?.as_str() {
                "1" => self.attempt(Self::list_services)?,
                "2" => self.attempt(Self::show_service)?,
                "3" => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn list_services(&mut self) -> CliResult<()> {
        let Desk { hotel, console, display, .. } = self;

        console.say("List of Hotel Services:")?;
        for record in hotel.services().list() {
            let name = record.get(service::NAME).unwrap_or(display.fallback.as_str());
            console.say(format!("- {}", name))?;
        }
        Ok(())
    }

    fn show_service(&mut self) -> CliResult<()> {
        let Desk { hotel, console, display, .. } = self;

        let names: Vec<&str> = hotel
            .services()
            .list()
            .iter()
            .map(|record| record.get(service::NAME).unwrap_or(display.fallback.as_str()))
            .collect();
        if names.is_empty() {
            return console.say("No services are available.");
        }

        console.say("Available Services:")?;
        let Some(index) = console.pick(&names, "Choose a service by number: ")? else {
            return console.say(INVALID_CHOICE);
        };
        let chosen = hotel.services().by_number(index + 1)?;
        show_record(console, "Service Information:", chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{run_script, tables};

    #[test]
    fn test_list_services() {
        let dir = tables();
        let out = run_script(dir.path(), "4\n1\n3\n5\n");
        assert!(out.contains("List of Hotel Services:\n- Spa\n- Airport Shuttle\n"));
    }

    #[test]
    fn test_show_service() {
        let dir = tables();
        let out = run_script(dir.path(), "4\n2\n1\n2\n9\n3\n5\n");
        assert!(out.contains("Service Information:\nService Name: Spa\nDescription: Sauna, steam room\nPrice: 40\n"));
        assert!(out.contains("Invalid choice. Please try again."));
    }
}
