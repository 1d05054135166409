//! Record and value types for flight queries
//!
//! All types are explicit and typed. Validation happens in the constructors,
//! so a `FlightDate` or `AirportCode` in hand is always usable as a query key.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Departure delay (minutes) at or above which a flight counts as delayed
pub const DELAY_THRESHOLD_MINUTES: i64 = 20;

/// Length of an IATA airport code
pub const IATA_LENGTH: usize = 3;

/// One row of any flight query: flights joined with airlines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "ORIGIN_AIRPORT")]
    pub origin_airport: String,
    #[serde(rename = "DESTINATION_AIRPORT")]
    pub destination_airport: String,
    #[serde(rename = "AIRLINE")]
    pub airline: String,
    /// Departure delay in minutes (NULL in the dataset for cancelled flights)
    #[serde(rename = "DELAY")]
    pub delay: Option<i64>,
}

impl FlightRecord {
    /// Delay with NULL read as zero
    pub fn delay_minutes(&self) -> i64 {
        self.delay.unwrap_or(0)
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_minutes() >= DELAY_THRESHOLD_MINUTES
    }
}

/// Calendar date used by the by-date query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl FlightDate {
    /// Input format accepted from users: DD/MM/YYYY
    pub const INPUT_FORMAT: &'static str = "%d/%m/%Y";

    /// Parse a `DD/MM/YYYY` date, rejecting impossible dates such as 31/02
    ///
    /// chrono's `%Y` also takes short or signed years, so the year field is
    /// checked separately: exactly four ASCII digits.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(input, Self::INPUT_FORMAT)?;
        let year = input.rsplit('/').next().unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Year(year.to_string()));
        }
        Ok(Self::from(date))
    }
}

/// Why a date string was rejected
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error(transparent)]
    Format(#[from] chrono::ParseError),

    #[error("year must have four digits, got '{0}'")]
    Year(String),
}

impl From<NaiveDate> for FlightDate {
    fn from(date: NaiveDate) -> Self {
        FlightDate {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for FlightDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Three-letter alphabetic airport code, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Accepts exactly three alphabetic characters; returns None otherwise
    pub fn parse(input: &str) -> Option<Self> {
        let valid =
            input.chars().count() == IATA_LENGTH && input.chars().all(char::is_alphabetic);
        valid.then(|| AirportCode(input.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request for one of the four flight queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightQuery {
    ById(i64),
    ByDate(FlightDate),
    /// Substring of the airline name; delayed flights only
    DelayedByAirline(String),
    /// Origin airport; delayed flights only
    DelayedByAirport(AirportCode),
}

impl fmt::Display for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightQuery::ById(id) => write!(f, "flight {id}"),
            FlightQuery::ByDate(date) => write!(f, "flights on {date}"),
            FlightQuery::DelayedByAirline(name) => write!(f, "delayed flights by airline '{name}'"),
            FlightQuery::DelayedByAirport(code) => write!(f, "delayed flights from {code}"),
        }
    }
}
