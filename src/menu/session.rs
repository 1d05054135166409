//! Menu session: drives the interactive loop over one FlightDb

use super::input::{parse_flight_id, Prompter};
use super::{write_menu, Error, MenuOption, Result};
use crate::flight_data::{rows_or_empty, AirportCode, FlightDate, FlightDb, FlightQuery};
use crate::output::{export_to_file, write_results};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// One interactive session
///
/// Reads from `input`, writes to `out`. Ends when the user picks Exit or
/// input runs out.
pub struct Session<'db, R, W> {
    db: &'db FlightDb,
    prompter: Prompter<R, W>,
}

impl<'db, R: BufRead, W: Write> Session<'db, R, W> {
    pub fn new(db: &'db FlightDb, input: R, out: W) -> Self {
        Session {
            db,
            prompter: Prompter::new(input, out),
        }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(Error::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            let option = self.choose_option()?;
            debug!("Menu option selected: {:?}", option);

            match option {
                MenuOption::FlightById => self.flight_by_id()?,
                MenuOption::FlightsByDate => self.flights_by_date()?,
                MenuOption::DelayedByAirline => self.delayed_flights_by_airline()?,
                MenuOption::DelayedByAirport => self.delayed_flights_by_airport()?,
                MenuOption::Exit => return Ok(()),
            }
        }
    }

    /// Show the menu, then read choices until one is valid
    fn choose_option(&mut self) -> Result<MenuOption> {
        write_menu(self.prompter.out())?;
        loop {
            let choice = self.prompter.read_line()?;
            if let Some(option) = MenuOption::from_choice(&choice) {
                return Ok(option);
            }
            writeln!(self.prompter.out(), "Try again...")?;
        }
    }

    fn flight_by_id(&mut self) -> Result<()> {
        let flight_id = loop {
            let input = self.prompter.prompt("Enter flight ID: ")?;
            match parse_flight_id(&input) {
                Ok(id) => break id,
                Err(_) => writeln!(self.prompter.out(), "Try again...")?,
            }
        };
        self.show_results(&FlightQuery::ById(flight_id))
    }

    fn flights_by_date(&mut self) -> Result<()> {
        let date = loop {
            let input = self.prompter.prompt("Enter date in DD/MM/YYYY format: ")?;
            match FlightDate::parse(&input) {
                Ok(date) => break date,
                Err(e) => writeln!(self.prompter.out(), "Try again... {e}")?,
            }
        };
        self.show_results(&FlightQuery::ByDate(date))
    }

    fn delayed_flights_by_airline(&mut self) -> Result<()> {
        let airline = self.prompter.prompt("Enter airline name: ")?;
        self.show_results(&FlightQuery::DelayedByAirline(airline))
    }

    fn delayed_flights_by_airport(&mut self) -> Result<()> {
        let airport = loop {
            let input = self.prompter.prompt("Enter origin airport IATA code: ")?;
            if let Some(code) = AirportCode::parse(&input) {
                break code;
            }
        };
        self.show_results(&FlightQuery::DelayedByAirport(airport))
    }

    /// Run the query, print results, then offer a CSV export when there is
    /// anything to export
    fn show_results(&mut self, query: &FlightQuery) -> Result<()> {
        let records = rows_or_empty(self.db.execute(query), self.prompter.out())?;
        write_results(&records, self.prompter.out())?;
        if records.is_empty() {
            return Ok(());
        }

        let answer = self
            .prompter
            .prompt("\nWould you like to export this data to a CSV file? (y/n): ")?;
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(());
        }

        let filename = self.prompter.prompt("Enter filename (e.g. flights.csv): ")?;
        match export_to_file(&records, &filename) {
            Ok(()) => writeln!(
                self.prompter.out(),
                "Data successfully exported to '{filename}'"
            )?,
            Err(e) => {
                warn!("CSV export to {filename} failed: {e:#}");
                writeln!(self.prompter.out(), "Export failed: {e:#}")?;
            }
        }
        Ok(())
    }
}
