//! Configuration file support
//!
//! An optional TOML file supplies defaults that flags and environment
//! variables override:
//!
//! ```toml
//! database_path = "/srv/data/flights.sqlite3"
//! log_filter = "flight_records=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, Error>;

/// Settings read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Flights database to open when neither --db nor $FLIGHTS_DB is set
    pub database_path: Option<PathBuf>,
    /// tracing filter directive used when $FLIGHTS_LOG is unset
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Default location: `<config_dir>/flight-records/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flight-records").join("config.toml"))
    }

    /// Load configuration
    ///
    /// * `Some(path)` — the file must exist
    /// * `None` — use the default location if a file is there, defaults otherwise
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::NotFound(path.display().to_string()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
