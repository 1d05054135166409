//! Flights database: read-only access to the flights dataset
//!
//! - `FlightDb::open()` — Open a read-only connection to the SQLite file
//! - The file must already exist; nothing here creates or migrates tables

use super::Error;
use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::info;

/// Flights database handle (read-only)
pub struct FlightDb {
    conn: Connection,
    path: PathBuf,
}

impl FlightDb {
    /// Open the flights database read-only
    ///
    /// # Returns
    /// * `Ok(FlightDb)` — Connection open
    /// * `Err(Error::DatabaseNotFound)` — No file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Opening a missing file read-only fails with an opaque SQLite error
        if !path.exists() {
            return Err(Error::DatabaseNotFound(path.display().to_string()))
                .context("flights database not found");
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open flights database {}", path.display()))?;

        info!("Opened flights database at {}", path.display());

        Ok(FlightDb {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Get the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Path the database was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}
