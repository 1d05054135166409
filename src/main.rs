//! flights CLI
//!
//! Without a subcommand, runs the interactive menu. Subcommands run a single
//! query and exit with a deterministic code (0 ok, 1 failure, 2 database).

use clap::Parser;
use flight_records::cli::{run_cli_mode, Args};

fn main() {
    let args = Args::parse();
    let exit_code = run_cli_mode(args);
    std::process::exit(exit_code);
}
