//! CLI module
//!
//! Provides:
//! - Argument parsing (interactive menu or one-shot query commands)
//! - Database path resolution (flag → env → config file → default)
//! - Logging setup
//! - Mode dispatch

pub mod args;
pub mod db_path;
pub mod dispatch;
pub mod logging;

// Re-exports
pub use args::{Args, Command, OutputArgs};
pub use db_path::{resolve_db_path, DEFAULT_DB_PATH, DB_PATH_ENV};
pub use dispatch::{build_query, run_cli_mode, run_query_command, ExitCode};
pub use logging::init_logging;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::Error),

    #[error("Session error: {0}")]
    Session(#[from] crate::menu::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_DB_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
