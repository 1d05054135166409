//! Flight query implementations
//!
//! Four SELECT-only queries over `flights JOIN airlines`, each bound with
//! named parameters. Every query yields the same five columns, decoded by
//! `row_to_flight_record`.

use super::types::*;
use super::{Error, FlightDb};
use anyhow::Result;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{named_params, Params, Row};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Shared projection and join for every flight query
macro_rules! flight_select {
    () => {
        "SELECT
            flights.ID,
            flights.ORIGIN_AIRPORT,
            flights.DESTINATION_AIRPORT,
            airlines.airline AS AIRLINE,
            flights.DEPARTURE_DELAY AS DELAY
         FROM flights
         JOIN airlines ON flights.airline = airlines.id
         "
    };
}

const QUERY_FLIGHT_BY_ID: &str = concat!(flight_select!(), "WHERE flights.ID = :id");

const QUERY_FLIGHTS_BY_DATE: &str = concat!(
    flight_select!(),
    "WHERE flights.DAY = :day
       AND flights.MONTH = :month
       AND flights.YEAR = :year"
);

const QUERY_DELAYED_BY_AIRLINE: &str = concat!(
    flight_select!(),
    "WHERE airlines.airline LIKE :airline
       AND flights.DEPARTURE_DELAY >= :threshold"
);

const QUERY_DELAYED_BY_AIRPORT: &str = concat!(
    flight_select!(),
    "WHERE flights.ORIGIN_AIRPORT = :airport
       AND flights.DEPARTURE_DELAY >= :threshold"
);

impl FlightDb {
    /// Run any of the four queries
    pub fn execute(&self, query: &FlightQuery) -> Result<Vec<FlightRecord>> {
        debug!("Running query: {query}");
        match query {
            FlightQuery::ById(id) => self.flight_by_id(*id),
            FlightQuery::ByDate(date) => self.flights_by_date(*date),
            FlightQuery::DelayedByAirline(name) => self.delayed_flights_by_airline(name),
            FlightQuery::DelayedByAirport(code) => self.delayed_flights_by_airport(code),
        }
    }

    /// Look up a single flight by its ID
    pub fn flight_by_id(&self, flight_id: i64) -> Result<Vec<FlightRecord>> {
        self.run_query(QUERY_FLIGHT_BY_ID, named_params! { ":id": flight_id })
    }

    /// All flights scheduled on a given day
    pub fn flights_by_date(&self, date: FlightDate) -> Result<Vec<FlightRecord>> {
        self.run_query(
            QUERY_FLIGHTS_BY_DATE,
            named_params! {
                ":day": date.day,
                ":month": date.month,
                ":year": date.year
            },
        )
    }

    /// Delayed flights whose airline name contains `airline_name`
    ///
    /// Substring match through LIKE, so `%` and `_` in the input act as
    /// wildcards and ASCII letters match case-insensitively.
    pub fn delayed_flights_by_airline(&self, airline_name: &str) -> Result<Vec<FlightRecord>> {
        let pattern = format!("%{airline_name}%");
        self.run_query(
            QUERY_DELAYED_BY_AIRLINE,
            named_params! {
                ":airline": pattern,
                ":threshold": DELAY_THRESHOLD_MINUTES
            },
        )
    }

    /// Delayed flights departing from `airport`
    pub fn delayed_flights_by_airport(&self, airport: &AirportCode) -> Result<Vec<FlightRecord>> {
        self.run_query(
            QUERY_DELAYED_BY_AIRPORT,
            named_params! {
                ":airport": airport.as_str(),
                ":threshold": DELAY_THRESHOLD_MINUTES
            },
        )
    }

    fn run_query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<FlightRecord>> {
        let mut stmt = self.conn().prepare(sql)?;
        let rows = stmt.query_map(params, row_to_flight_record)?;
        let records = rows.collect::<::std::result::Result<Vec<_>, _>>()?;
        debug!("Flight query returned {} rows", records.len());
        Ok(records)
    }
}

/// Unwrap a query result for interactive use
///
/// A failed query is reported to the user as `Query error: ...` and treated
/// as an empty result, so the menu loop keeps running.
pub fn rows_or_empty<W: Write>(
    result: Result<Vec<FlightRecord>>,
    out: &mut W,
) -> io::Result<Vec<FlightRecord>> {
    match result {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!("Flight query failed: {e:#}");
            writeln!(out, "Query error: {e:#}")?;
            Ok(Vec::new())
        }
    }
}

// Helper: Convert row to FlightRecord
fn row_to_flight_record(r: &Row) -> rusqlite::Result<FlightRecord> {
    Ok(FlightRecord {
        id: r.get(0)?,
        origin_airport: text_column(r, 1, "ORIGIN_AIRPORT")?,
        destination_airport: text_column(r, 2, "DESTINATION_AIRPORT")?,
        airline: text_column(r, 3, "AIRLINE")?,
        delay: delay_column(r, 4)?,
    })
}

/// Read a column as text, accepting numeric storage (SQLite is dynamically typed)
fn text_column(r: &Row, idx: usize, column: &'static str) -> rusqlite::Result<String> {
    match r.get_ref(idx)? {
        ValueRef::Text(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(i) => Ok(i.to_string()),
        ValueRef::Real(f) => Ok(f.to_string()),
        ValueRef::Null => Ok(String::new()),
        ValueRef::Blob(_) => Err(decode_failure(idx, Type::Blob, column, "unexpected blob")),
    }
}

/// Read DEPARTURE_DELAY as whole minutes; reals are truncated
fn delay_column(r: &Row, idx: usize) -> rusqlite::Result<Option<i64>> {
    match r.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(i)),
        ValueRef::Real(f) => Ok(Some(f.trunc() as i64)),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f.trunc() as i64))
                .map(Some)
                .ok_or_else(|| {
                    decode_failure(idx, Type::Text, "DELAY", &format!("not a number: {text}"))
                })
        }
        ValueRef::Blob(_) => Err(decode_failure(idx, Type::Blob, "DELAY", "unexpected blob")),
    }
}

fn decode_failure(idx: usize, ty: Type, column: &'static str, reason: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        ty,
        Box::new(Error::Decode {
            column,
            reason: reason.to_string(),
        }),
    )
}
