//! CLI mode dispatch
//!
//! - menu (default): interactive session on stdin/stdout
//! - by-id / by-date / by-airline / by-airport: one query, then exit

use crate::cli::db_path::resolve_db_path;
use crate::cli::logging::init_logging;
use crate::cli::{
    Args, Command, Error, OutputArgs, Result, EXIT_DB_ERROR, EXIT_FAILURE, EXIT_SUCCESS,
};
use crate::config::AppConfig;
use crate::flight_data::{AirportCode, FlightDate, FlightDb, FlightQuery, FlightRecord};
use crate::menu::{parse_flight_id, Session};
use crate::output::{export_to_file, to_json, write_results};
use std::io::{self, Write};
use tracing::info;

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run the CLI and return an exit code
///
/// Called from main() after argument parsing.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    };

    init_logging(args.verbose, config.log_filter.as_deref());

    let db_path = resolve_db_path(args.db, &config);
    let db = match FlightDb::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_DB_ERROR;
        }
    };

    let result = match args.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&db),
        command => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_query_command(&db, &command, &mut out)
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            // Map error to exit code
            match e {
                Error::Database(_) => EXIT_DB_ERROR,
                _ => EXIT_FAILURE,
            }
        }
    }
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let config = AppConfig::load(args.config.as_deref())?;
    Ok(config)
}

/// Interactive menu on stdin/stdout
fn run_menu(db: &FlightDb) -> Result<()> {
    info!("Starting interactive session on {}", db.path().display());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(db, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

/// Validate a one-shot command's argument into a query
///
/// Applies the same rules as the interactive menu.
pub fn build_query(command: &Command) -> Result<FlightQuery> {
    match command {
        Command::Menu => Err(Error::InvalidArgs(
            "menu is not a query command".to_string(),
        )),
        Command::ById { id, .. } => parse_flight_id(id)
            .map(FlightQuery::ById)
            .map_err(|e| Error::InvalidArgs(format!("invalid flight ID '{}': {}", id, e))),
        Command::ByDate { date, .. } => FlightDate::parse(date)
            .map(FlightQuery::ByDate)
            .map_err(|e| {
                Error::InvalidArgs(format!("invalid date '{}' (expected DD/MM/YYYY): {}", date, e))
            }),
        Command::ByAirline { name, .. } => Ok(FlightQuery::DelayedByAirline(name.clone())),
        Command::ByAirport { code, .. } => AirportCode::parse(code)
            .map(FlightQuery::DelayedByAirport)
            .ok_or_else(|| {
                Error::InvalidArgs(format!(
                    "invalid airport code '{}' (expected three letters)",
                    code
                ))
            }),
    }
}

/// Run one query command and print its results to `out`
///
/// Unlike the menu, a failing query is an error here.
pub fn run_query_command<W: Write>(db: &FlightDb, command: &Command, out: &mut W) -> Result<()> {
    let query = build_query(command)?;
    let output = command.output().cloned().unwrap_or_default();

    let records = db
        .execute(&query)
        .map_err(|e| Error::Database(format!("Query failed: {:#}", e)))?;
    info!("{} matched {} flights", query, records.len());

    print_records(&records, &output, out)?;

    if let Some(ref path) = output.csv {
        export_to_file(&records, path).map_err(|e| Error::Export(format!("{:#}", e)))?;
        // Keep JSON output machine-readable
        if !output.json {
            writeln!(out, "Data successfully exported to '{}'", path.display())?;
        }
    }

    Ok(())
}

fn print_records<W: Write>(
    records: &[FlightRecord],
    output: &OutputArgs,
    out: &mut W,
) -> Result<()> {
    if output.json {
        writeln!(out, "{}", to_json(records)?)?;
    } else {
        write_results(records, out)?;
    }
    Ok(())
}
