//! Storage port: the key-value store and the context that opens it
//!
//! Preferences never touch persistence directly. A [`Context`] opens named
//! [`Store`]s, and every write reaches a store as one [`Transaction`].

use crate::error::StoreError;
use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single change inside a [`Transaction`]
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Store `value` under `key`, replacing any previous value
    Put { key: String, value: Value },
    /// Remove `key` if present
    Remove { key: String },
}

/// A batch of changes committed atomically
///
/// When `clear` is set, all existing entries are discarded before the
/// changes are applied in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transaction {
    pub clear: bool,
    pub changes: Vec<Change>,
}

impl Transaction {
    /// Whether committing this transaction would change nothing
    pub fn is_empty(&self) -> bool {
        !self.clear && self.changes.is_empty()
    }

    /// Apply this transaction to an in-memory entry map
    pub fn apply_to(&self, entries: &mut BTreeMap<String, Value>) {
        if self.clear {
            entries.clear();
        }

        for change in &self.changes {
            match change {
                Change::Put { key, value } => {
                    entries.insert(key.clone(), value.clone());
                }
                Change::Remove { key } => {
                    entries.remove(key);
                }
            }
        }
    }
}

/// A named key-value store holding typed [`Value`]s
///
/// Implementations serialize commits internally; callers may share one
/// store across threads.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<Value>;

    /// Check whether `key` has a value
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Snapshot of every entry in the store
    fn entries(&self) -> BTreeMap<String, Value>;

    /// Apply a transaction atomically, blocking until it is persisted
    fn commit(&self, transaction: Transaction) -> Result<(), StoreError>;
}

/// The application handle used to open stores
///
/// Only consulted while building preferences.
pub trait Context: Send + Sync {
    /// Identifier of the running application, used as the default store name
    fn package_name(&self) -> String;

    /// Open or create the store registered under `name`
    ///
    /// Opening the same name twice yields the same logical store.
    fn open_store(&self, name: &str) -> Result<Arc<dyn Store>, StoreError>;
}
