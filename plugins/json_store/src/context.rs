//! Context that opens JSON stores under the application's config directory

use crate::app_name::AppName;
use crate::storage::{checked_store_path, storage_dir};
use crate::store::JsonStore;
use preferred::{Context, Store, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Opens one [`JsonStore`] per store name
///
/// Stores are cached, so every `Preferences` built for the same name shares
/// one store and one cache.
///
/// # Example
///
/// ```ignore
/// use preferred::PreferencesBuilder;
/// use preferred_json_store::{AppName, JsonContext};
///
/// let prefs = PreferencesBuilder::new()
///     .set_context(JsonContext::new(AppName::new("com", "example", "myapp")))
///     .set_use_default_name(true)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct JsonContext {
    app_name: AppName,
    base_dir: PathBuf,
    stores: Mutex<HashMap<String, Arc<JsonStore>>>,
}

impl JsonContext {
    /// Store files under the platform config directory for `app_name`
    pub fn new(app_name: AppName) -> Self {
        let base_dir = storage_dir(&app_name);
        Self::with_base_dir(app_name, base_dir)
    }

    /// Store files under an explicit directory
    pub fn with_base_dir(app_name: AppName, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name,
            base_dir: base_dir.into(),
            stores: Mutex::new(HashMap::new()),
        }
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    /// Directory holding the store files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Context for JsonContext {
    fn package_name(&self) -> String {
        self.app_name.package_name()
    }

    fn open_store(&self, name: &str) -> Result<Arc<dyn Store>, StoreError> {
        let path = checked_store_path(&self.base_dir, name)?;
        let mut stores = self
            .stores
            .lock()
            .map_err(|_| StoreError::Format("store registry lock poisoned".to_string()))?;

        if let Some(store) = stores.get(name) {
            return Ok(Arc::clone(store) as Arc<dyn Store>);
        }

        let store = Arc::new(JsonStore::open(path)?);
        stores.insert(name.to_string(), Arc::clone(&store));
        Ok(store as Arc<dyn Store>)
    }
}
