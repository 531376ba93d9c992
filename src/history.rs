//! Persistent conversion history
//!
//! Stores the ordered log of past conversions as a single JSON file that is
//! read entirely and rewritten entirely on every mutation. A missing file is
//! an empty history, not an error. There is no locking: concurrent writers
//! are last-write-wins, acceptable for single-user interactive use.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::units::ConversionRecord;

/// File name of the persisted history inside the data directory
const HISTORY_FILE: &str = "history.json";

/// Errors that can occur when reading or writing the history file
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the history file failed
    #[error("failed to access history file: {0}")]
    Io(#[from] std::io::Error),

    /// The history file exists but is not valid JSON in the expected shape
    #[error("history file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Append-only store for conversion records
///
/// Records are persisted as a whole-document JSON array of 4-element arrays
/// `[value, fromUnit, toUnit, result]`, in insertion order.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Path of the history file
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a HistoryStore in the XDG-compliant data directory
    /// (`~/.local/share/unitconv/` on Linux, or equivalent elsewhere).
    ///
    /// Returns `None` if the data directory cannot be determined.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "unitconv")?;
        Some(Self {
            path: project_dirs.data_dir().join(HISTORY_FILE),
        })
    }

    /// Creates a HistoryStore rooted in a custom directory.
    ///
    /// Useful for testing or when a specific storage location is needed.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            path: dir.join(HISTORY_FILE),
        }
    }

    /// Loads the full history, oldest record first.
    ///
    /// A missing file yields an empty vector; an unreadable or malformed
    /// file is reported as an error rather than silently discarded.
    pub fn load(&self) -> Result<Vec<ConversionRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Appends a record, rewriting the whole file.
    pub fn append(&self, record: ConversionRecord) -> Result<(), HistoryError> {
        let mut history = self.load()?;
        history.push(record);
        self.save(&history)
    }

    /// Discards all records.
    pub fn clear(&self) -> Result<(), HistoryError> {
        self.save(&[])
    }

    /// Persists the given sequence as the entire history.
    fn save(&self, records: &[ConversionRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = records.len(), "history saved");
        Ok(())
    }
}
