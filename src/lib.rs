//! flight-records: query a flights dataset stored in SQLite
//!
//! Four read-only queries (by ID, by date, delayed by airline, delayed by
//! origin airport), an interactive menu around them, and text/CSV/JSON output.

pub mod cli;
pub mod config;
pub mod flight_data;
pub mod menu;
pub mod output;

// Re-export the data access layer
pub use flight_data::{AirportCode, FlightDate, FlightDb, FlightQuery, FlightRecord};

// Re-export the interactive session
pub use menu::{MenuOption, Session};
