use crate::journal_entry::JournalEntry;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Fixed namespaced name for the persisted entry collection.
pub const STORAGE_KEY: &str = "jielewe-journal-entries.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored entries are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable home for the entry collection. The whole collection is read and
/// written as one unit.
pub trait EntryStore: Send {
    fn load(&self) -> Result<Vec<JournalEntry>, StoreError>;
    fn save(&self, entries: &[JournalEntry]) -> Result<(), StoreError>;

    /// Moves an unreadable stored value out of the way. Returns where it went,
    /// or `None` when there was nothing to move.
    fn set_aside(&self) -> Result<Option<PathBuf>, StoreError> {
        Ok(None)
    }
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// `<file>.bak`, next to the journal file.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl EntryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let serialized = match fs::read_to_string(&self.path) {
            Ok(serialized) => serialized,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no journal file yet, starting fresh");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<JournalEntry> = serde_json::from_str(&serialized)?;
        Ok(entries)
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_json::to_string(entries)?;
        fs::write(&self.path, serialized)?;
        debug!(count = entries.len(), path = %self.path.display(), "journal saved");
        Ok(())
    }

    fn set_aside(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        fs::rename(&self.path, &backup)?;
        Ok(Some(backup))
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory store that records every save, for tests.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        pub initial: Vec<JournalEntry>,
        pub saves: Arc<Mutex<Vec<Vec<JournalEntry>>>>,
        pub fail_saves: bool,
        pub fail_loads: bool,
        pub set_asides: Arc<Mutex<usize>>,
    }

    impl MemoryStore {
        pub fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }

        pub fn last_save(&self) -> Option<Vec<JournalEntry>> {
            self.saves.lock().unwrap().last().cloned()
        }

        pub fn set_aside_count(&self) -> usize {
            *self.set_asides.lock().unwrap()
        }
    }

    impl EntryStore for MemoryStore {
        fn load(&self) -> Result<Vec<JournalEntry>, StoreError> {
            if self.fail_loads {
                return Err(serde_json::from_str::<Vec<JournalEntry>>("[{").unwrap_err().into());
            }
            Ok(self.initial.clone())
        }

        fn save(&self, entries: &[JournalEntry]) -> Result<(), StoreError> {
            if self.fail_saves {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
            }
            self.saves.lock().unwrap().push(entries.to_vec());
            Ok(())
        }

        fn set_aside(&self) -> Result<Option<PathBuf>, StoreError> {
            *self.set_asides.lock().unwrap() += 1;
            Ok(Some(PathBuf::from("memory.bak")))
        }
    }
}
