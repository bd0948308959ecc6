//! Stats persistence backends

use super::Stats;
use crate::error::PersistenceError;
use directories::ProjectDirs;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key the stats record is stored under
pub const STATS_KEY: &str = "wordleStats";

/// Key-value storage for [`Stats`]
pub trait StatsStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Stats>, PersistenceError>;
    fn save(&self, stats: &Stats) -> Result<(), PersistenceError>;
}

/// JSON document on disk; stats live under [`STATS_KEY`]
///
/// Other keys in the document are left untouched on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store in the platform data directory
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NoDataDir` if no home directory is known.
    pub fn new() -> Result<Self, PersistenceError> {
        let dirs = ProjectDirs::from("", "", "wordshift").ok_or(PersistenceError::NoDataDir)?;
        Ok(Self::with_path(dirs.data_dir().join("storage.json")))
    }

    #[must_use]
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, PersistenceError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Stats>, PersistenceError> {
        let document = self.read_document()?;
        match document.get(STATS_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn save(&self, stats: &Stats) -> Result<(), PersistenceError> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(PersistenceError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "replacing unreadable stats file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(STATS_KEY.to_string(), serde_json::to_value(stats)?);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&document)?)?;
        Ok(())
    }
}

/// Use `opened`, or keep stats in memory when the file store is unavailable
///
/// Losing persistence only costs the counters, so the game still starts.
#[must_use]
pub fn file_or_memory(opened: Result<JsonFileStore, PersistenceError>) -> Box<dyn StatsStore> {
    match opened {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "stats store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "stats will not be saved this run");
            Box::new(MemoryStore::default())
        }
    }
}

/// Shared in-memory store
///
/// Clones share the same slot, so a test can keep one handle and hand the
/// other to a ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Stats>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_stats(stats: Stats) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(stats))),
        }
    }

    /// Last saved value
    #[must_use]
    pub fn saved(&self) -> Option<Stats> {
        *self.slot.borrow()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Option<Stats>, PersistenceError> {
        Ok(self.saved())
    }

    fn save(&self, stats: &Stats) -> Result<(), PersistenceError> {
        *self.slot.borrow_mut() = Some(*stats);
        Ok(())
    }
}
