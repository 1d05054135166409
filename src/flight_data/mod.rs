//! Flight data access
//!
//! Read-only query interface over the flights dataset.
//!
//! ## Architecture
//!
//! - `db.rs` — FlightDb, read-only connection management
//! - `queries.rs` — the four flight queries
//! - `types.rs` — Record and validated key types

pub mod db;
pub mod queries;
pub mod types;

// Re-export main types
pub use db::FlightDb;
pub use queries::rows_or_empty;
pub use types::*;

/// Flight data errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("flights database not found at {0}")]
    DatabaseNotFound(String),

    #[error("cannot decode column {column}: {reason}")]
    Decode { column: &'static str, reason: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
