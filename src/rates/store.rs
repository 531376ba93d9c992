//! On-disk persistence for the exchange-rate table
//!
//! The table is stored as a single flat JSON object mapping currency code to
//! USD-relative rate. It carries no timestamps: the whole table is treated
//! as equally fresh and is only ever overwritten wholesale.

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use directories::ProjectDirs;
use tracing::debug;

use super::{RateTable, RatesError};

/// File name of the persisted rate table inside the data directory
const RATES_FILE: &str = "currency_rates.json";

/// Reads and writes the cached exchange-rate table
#[derive(Debug, Clone)]
pub struct RateStore {
    /// Path of the rate cache file
    path: PathBuf,
}

impl RateStore {
    /// Creates a RateStore in the XDG-compliant data directory.
    ///
    /// Returns `None` if the data directory cannot be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "unitconv")?;
        Some(Self {
            path: project_dirs.data_dir().join(RATES_FILE),
        })
    }

    /// Creates a RateStore rooted in a custom directory.
    ///
    /// Useful for testing or when a specific storage location is needed.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            path: dir.join(RATES_FILE),
        }
    }

    /// Loads the cached rate table.
    ///
    /// Returns `Ok(None)` when no cache file exists (callers fall back to a
    /// fresh fetch); a malformed file is an error, not an empty table.
    pub fn load(&self) -> Result<Option<RateTable>, RatesError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no rate cache file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrites the cache with the given table.
    pub fn save(&self, rates: &RateTable) -> Result<(), RatesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(rates)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = rates.len(), "rate cache saved");
        Ok(())
    }

    /// Returns when the cache file was last written, if it exists.
    ///
    /// Derived from file metadata; the table format itself is timestamp-free.
    pub fn last_refreshed(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }
}
