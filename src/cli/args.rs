//! CLI argument parsing
//!
//! ```text
//! flights [--db <PATH>] [--config <PATH>] [-v...] [COMMAND]
//!
//! COMMANDS:
//!   (none) / menu              → interactive menu
//!   by-id <ID>                 → one flight
//!   by-date <DD/MM/YYYY>       → flights on a day
//!   by-airline <NAME>          → delayed flights, airline name contains NAME
//!   by-airport <IATA>          → delayed flights from an origin airport
//! ```
//!
//! Query arguments are taken as text and validated by the same rules the
//! menu applies, so both surfaces reject the same inputs.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Query the flights dataset
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "flights", version, about)]
pub struct Args {
    /// Flights SQLite database (overrides $FLIGHTS_DB and the config file)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file (default: <config dir>/flight-records/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Menu,

    /// Show a flight by ID
    ById {
        #[arg(allow_negative_numbers = true)]
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show flights on a date (DD/MM/YYYY)
    ByDate {
        date: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delayed flights for airlines whose name contains NAME
    ByAirline {
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delayed flights departing from an airport (IATA code)
    ByAirport {
        code: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Command {
    /// Output options of a one-shot query; None for the menu
    pub fn output(&self) -> Option<&OutputArgs> {
        match self {
            Command::Menu => None,
            Command::ById { output, .. }
            | Command::ByDate { output, .. }
            | Command::ByAirline { output, .. }
            | Command::ByAirport { output, .. } => Some(output),
        }
    }
}

/// Output options shared by one-shot query commands
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct OutputArgs {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Also export results to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}
