//! Company information menu.

use std::io::{BufRead, Write};

use hotel_core::types::company;
use hotel_core::RoomType;

use super::{show_fields, Desk, INVALID_CHOICE};
use crate::error::CliResult;

const COMPANY_MENU: [&str; 5] = [
    "Search company by name",
    "Search company by type",
    "Calculate discounted corporate prices",
    "Change cooperation status",
    "Go back",
];

const ACCOUNT_FIELDS: [(&str, &str); 4] = [
    ("Company Name", company::NAME),
    ("Company Type", company::TYPE),
    ("Nights Occupied Last Year", company::NIGHTS_OCCUPIED),
    ("Cooperation Status", company::COOPERATION_STATUS),
];

/// Account fields followed by one price line per room type.
fn company_fields() -> Vec<(&'static str, &'static str)> {
    ACCOUNT_FIELDS
        .into_iter()
        .chain(RoomType::ALL.iter().map(|room| (room.price_column(), room.price_column())))
        .collect()
}

impl<R: BufRead, W: Write> Desk<R, W> {
    pub(super) fn company_menu(&mut self) -> CliResult<()> {
        loop {
            match self.menu("Company Operations:", &COMPANY_MENU, "Choose an operation: ")?.as_str() {
                "1" => self.attempt(Self::search_companies_by_name)?,
                "2" => self.attempt(Self::search_companies_by_type)?,
                "3" => self.attempt(Self::quote_corporate_prices)?,
                "4" => self.attempt(Self::change_cooperation_status)?,
                "5" => return Ok(()),
                _ => self.console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn search_companies_by_name(&mut self) -> CliResult<()> {
        let name = self.console.ask("Enter company name: ")?;
        let Desk { hotel, console, display, .. } = self;

        let matches = hotel.companies().search_by_name(&name);
        if matches.is_empty() {
            return console.say(format!("No match found for the company name '{}'.", name));
        }
        let fields = company_fields();
        for found in matches {
            show_fields(console, display, "Company Information:", found, &fields)?;
        }
        Ok(())
    }

    fn search_companies_by_type(&mut self) -> CliResult<()> {
        let types = self.hotel.companies().company_types()?;
        if types.is_empty() {
            return self.console.say("No company types are recorded.");
        }

        self.console.say("Available Company Types:")?;
        let Some(index) = self.console.pick(&types, "Select a company type by number: ")? else {
            return self.console.say(INVALID_CHOICE);
        };

        let Desk { hotel, console, display, .. } = self;
        let fields = company_fields();
        for found in hotel.companies().by_type(&types[index]) {
            show_fields(console, display, "Company Information:", found, &fields)?;
        }
        Ok(())
    }

    fn quote_corporate_prices(&mut self) -> CliResult<()> {
        let name = self.console.ask("Enter company name: ")?;
        let quote = self.hotel.companies().discount_quote(&name)?;

        self.console.say(format!(
            "The company '{}' has occupied {} nights within a year and gets a {}% discount.",
            quote.company_name,
            quote.nights,
            quote.tier.percent()
        ))?;
        for room in &quote.rooms {
            self.console.say(format!(
                "{}: Original Price: {}, Discounted Price: {}",
                room.room.price_column(),
                room.original,
                room.discounted
            ))?;
        }
        Ok(())
    }

    fn change_cooperation_status(&mut self) -> CliResult<()> {
        let name = self.console.ask("Enter company name: ")?;
        let status = self.hotel.companies().status_options(&name)?;

        self.console
            .say(format!("Current Cooperation Status: {}", status.current))?;
        self.console.say("Available statuses to change:")?;
        let Some(index) = self
            .console
            .pick(&status.options, "Select the new status by number: ")?
        else {
            return self.console.say(INVALID_CHOICE);
        };

        let chosen = status.options[index];
        self.hotel.companies_mut().change_status(&name, chosen)?;
        self.console
            .say(format!("Cooperation status changed to '{}'.", chosen))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{run_script, tables};
    use super::*;

    #[test]
    fn test_search_by_name_and_type() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n1\nnorth\n1\nAcme\n2\n1\n5\n5\n");
        assert!(out.contains("Company Name: Northwind Logistics"));
        assert!(out.contains("No match found for the company name 'Acme'."));
        assert!(out.contains("1. Consulting\n2. Logistics\n"));
        assert!(out.contains("Company Name: Contoso"));
    }

    #[test]
    fn test_company_display_lists_prices() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n1\ncontoso\n5\n5\n");
        assert!(out.contains("Cooperation Status: Pending\nStandard Price: 100\nTwin Price: 110\n"));
        assert!(out.contains("Suite Price: 250\n"));
        assert_eq!(company_fields().len(), 10);
    }

    #[test]
    fn test_absent_price_shows_fallback() {
        let dir = tables();
        std::fs::write(
            dir.path().join("Companies.csv"),
            "Company Name,Company Type,Nights Occupied Last Year,Cooperation Status,Standard Price\n\
Fabrikam,Retail,12,Active,90\n",
        )
        .unwrap();

        let out = run_script(dir.path(), "2\n1\nfabrikam\n5\n5\n");
        assert!(out.contains("Standard Price: 90\n"));
        assert!(out.contains("Twin Price: N/A\n"));
        assert!(out.contains("Suite Price: N/A\n"));
    }

    #[test]
    fn test_discount_quote() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n3\nnorthwind logistics\n5\n5\n");
        assert!(out.contains(
            "The company 'Northwind Logistics' has occupied 120 nights within a year and gets a 12% discount."
        ));
        assert!(out.contains("Standard Price: Original Price: 100.00, Discounted Price: 88.00"));
        assert!(out.contains("Suite Price: Original Price: 250.00, Discounted Price: 220.00"));
    }

    #[test]
    fn test_unknown_company_reports_error() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n3\nAcme\n5\n5\n");
        assert!(out.contains("Error: Company not found: Acme"));
    }

    #[test]
    fn test_change_status_is_saved() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n4\nContoso\n1\n5\n5\n");
        assert!(out.contains("Current Cooperation Status: Pending"));
        assert!(out.contains("1. Active\n2. Inactive\n"));
        assert!(out.contains("Cooperation status changed to 'Active'."));

        let saved = std::fs::read_to_string(dir.path().join("Companies.csv")).unwrap();
        assert!(saved.contains("Contoso,Consulting,49,Active,"));
    }

    #[test]
    fn test_status_pick_out_of_range() {
        let dir = tables();
        let out = run_script(dir.path(), "2\n4\nContoso\n7\n5\n5\n");
        assert!(out.contains("Invalid choice. Please try again."));

        let saved = std::fs::read_to_string(dir.path().join("Companies.csv")).unwrap();
        assert!(saved.contains("Contoso,Consulting,49,Pending,"));
    }
}
