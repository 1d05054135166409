//! Database path resolution
//!
//! Priority:
//! 1. --db <path> flag (highest priority)
//! 2. $FLIGHTS_DB env var
//! 3. `database_path` in the config file
//! 4. `data/flights.sqlite3` (default)

use crate::config::AppConfig;
use std::path::PathBuf;

/// Environment variable naming the flights database
pub const DB_PATH_ENV: &str = "FLIGHTS_DB";

/// Database used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "data/flights.sqlite3";

/// Resolve the database path from flag, environment and config
///
/// Existence is not checked here; `FlightDb::open` reports a missing file.
pub fn resolve_db_path(explicit: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    resolve_with_env(explicit, std::env::var(DB_PATH_ENV).ok(), config)
}

fn resolve_with_env(explicit: Option<PathBuf>, env: Option<String>, config: &AppConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    // An empty variable counts as unset
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    config
        .database_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}
