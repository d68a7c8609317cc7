//! In-memory store and context
//!
//! Nothing is persisted past the life of the process. Useful for tests and
//! for applications that only need preferences for a single session.

use crate::error::StoreError;
use crate::store::{Context, Store, Transaction};
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Store that keeps its entries in a map guarded by a lock
#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    entries: RwLock<BTreeMap<String, Value>>,
    read_only: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name this store was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Make every following commit fail with [`StoreError::ReadOnly`]
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn entries(&self) -> BTreeMap<String, Value> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn commit(&self, transaction: Transaction) -> Result<(), StoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::ReadOnly(self.name.clone()));
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Format(format!("store '{}' lock poisoned", self.name)))?;
        transaction.apply_to(&mut entries);
        Ok(())
    }
}

/// Context that hands out [`MemoryStore`]s by name
#[derive(Debug)]
pub struct MemoryContext {
    package_name: String,
    stores: Mutex<HashMap<String, Arc<MemoryStore>>>,
}

impl MemoryContext {
    /// Create a context for the application identified by `package_name`
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            stores: Mutex::new(HashMap::new()),
        }
    }

    /// Get the concrete store opened under `name`, if any
    pub fn store(&self, name: &str) -> Option<Arc<MemoryStore>> {
        self.stores
            .lock()
            .ok()
            .and_then(|stores| stores.get(name).cloned())
    }

    /// Names of every store opened so far
    pub fn store_names(&self) -> Vec<String> {
        self.stores
            .lock()
            .map(|stores| stores.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Context for MemoryContext {
    fn package_name(&self) -> String {
        self.package_name.clone()
    }

    fn open_store(&self, name: &str) -> Result<Arc<dyn Store>, StoreError> {
        let mut stores = self
            .stores
            .lock()
            .map_err(|_| StoreError::Format("store registry lock poisoned".to_string()))?;

        let store = stores
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryStore::new(name)));

        Ok(Arc::clone(store) as Arc<dyn Store>)
    }
}
