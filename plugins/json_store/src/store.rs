//! File-backed store with an in-memory cache

use crate::storage::{Entries, load_entries, save_entries};
use preferred::{Store, StoreError, Transaction, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Store persisted as a single JSON file
///
/// Entries are loaded once when the store is opened and served from memory.
/// A commit applies the transaction to a copy, writes the copy to disk and
/// only then replaces the cached entries, so a failed write leaves both the
/// cache and the file untouched.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl JsonStore {
    /// Open the store at `path`, creating it on first commit if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = load_entries(&path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), "failed to read json store: {}", e);
        })?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened json store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the backing file, dropping the cached entries
    pub fn reload(&self) -> Result<(), StoreError> {
        let fresh = load_entries(&self.path).inspect_err(|e| {
            tracing::warn!(path = %self.path.display(), "failed to reload json store: {}", e);
        })?;
        let mut entries = self.lock()?;
        *entries = fresh;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Entries>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Format(format!("{} lock poisoned", self.path.display())))
    }
}

impl Store for JsonStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.lock().ok().and_then(|entries| entries.get(key).cloned())
    }

    fn entries(&self) -> Entries {
        self.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    fn commit(&self, transaction: Transaction) -> Result<(), StoreError> {
        let mut entries = self.lock()?;
        if transaction.is_empty() {
            return Ok(());
        }

        let mut next = entries.clone();
        transaction.apply_to(&mut next);
        save_entries(&self.path, &next)?;
        *entries = next;

        Ok(())
    }
}
