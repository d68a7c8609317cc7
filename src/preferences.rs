//! Typed facade over a single store

use crate::editor::Editor;
use crate::store::Store;
use crate::value::{PreferenceValue, StringSet, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Handle to one opened store with typed get/put accessors
///
/// Cloning is cheap; every clone talks to the same store. Build one with
/// [`PreferencesBuilder`](crate::PreferencesBuilder), or wrap a store directly
/// with [`Preferences::new`], and pass it to whatever needs it.
///
/// Every write commits synchronously and returns whether the commit
/// succeeded. Reads return the stored value, the supplied default, or the
/// type's zero-value when nothing is stored.
///
/// # Example
///
/// ```
/// use preferred::{MemoryContext, PreferencesBuilder};
///
/// let prefs = PreferencesBuilder::new()
///     .set_context(MemoryContext::new("com.example.app"))
///     .build()
///     .unwrap();
///
/// assert!(prefs.put_string("key", "someString"));
/// assert_eq!(prefs.get_string("key"), "someString");
/// assert_eq!(prefs.get_string("missing"), "");
/// ```
#[derive(Clone)]
pub struct Preferences {
    name: String,
    store: Arc<dyn Store>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Preferences {{ name: {} }}", self.name)
    }
}

impl Preferences {
    /// Wrap an already opened store
    pub fn new(name: impl Into<String>, store: Arc<dyn Store>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    /// Name of the store these preferences were opened from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying store, for access beyond the typed accessors
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Start a batch of writes
    pub fn edit(&self) -> Editor {
        Editor::new(Arc::clone(&self.store))
    }

    /// Store a value of any supported type
    pub fn put<T: PreferenceValue>(&self, key: &str, value: T) -> bool {
        self.edit().put(key, value).commit()
    }

    /// Read a value, falling back to the type's zero-value
    pub fn get<T: PreferenceValue>(&self, key: &str) -> T {
        self.get_or(key, T::zero())
    }

    /// Read a value, falling back to `default`
    ///
    /// A value stored with a different type also yields `default`.
    pub fn get_or<T: PreferenceValue>(&self, key: &str, default: T) -> T {
        let Some(value) = self.store.get(key) else {
            return default;
        };

        let found = value.kind();
        match T::from_value(value) {
            Some(value) => value,
            None => {
                tracing::warn!(
                    key,
                    "preference holds a {} value, expected {}",
                    found,
                    T::KIND
                );
                default
            }
        }
    }

    pub fn put_int(&self, key: &str, value: i32) -> bool {
        self.put(key, value)
    }

    pub fn get_int(&self, key: &str) -> i32 {
        self.get(key)
    }

    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_or(key, default)
    }

    pub fn put_boolean(&self, key: &str, value: bool) -> bool {
        self.put(key, value)
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        self.get(key)
    }

    pub fn get_boolean_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    pub fn put_long(&self, key: &str, value: i64) -> bool {
        self.put(key, value)
    }

    pub fn get_long(&self, key: &str) -> i64 {
        self.get(key)
    }

    pub fn get_long_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    pub fn put_float(&self, key: &str, value: f32) -> bool {
        self.put(key, value)
    }

    pub fn get_float(&self, key: &str) -> f32 {
        self.get(key)
    }

    pub fn get_float_or(&self, key: &str, default: f32) -> f32 {
        self.get_or(key, default)
    }

    pub fn put_string(&self, key: &str, value: impl Into<String>) -> bool {
        self.put(key, value.into())
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
    }

    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_or(key, default.into())
    }

    pub fn put_string_set(&self, key: &str, value: StringSet) -> bool {
        self.put(key, value)
    }

    pub fn get_string_set(&self, key: &str) -> StringSet {
        self.get(key)
    }

    pub fn get_string_set_or(&self, key: &str, default: StringSet) -> StringSet {
        self.get_or(key, default)
    }

    /// Remove a single preference
    pub fn remove(&self, key: &str) -> bool {
        self.edit().remove(key).commit()
    }

    /// Check whether a preference has been stored
    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    /// Remove every preference in the store
    pub fn clear(&self) -> bool {
        self.edit().clear().commit()
    }

    /// Every stored preference by name
    pub fn all_entries(&self) -> BTreeMap<String, Value> {
        self.store.entries()
    }
}
