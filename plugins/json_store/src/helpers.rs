//! Standalone helper functions for direct store access
//!
//! These functions read and write a store file without building
//! `Preferences`. Useful for CLI tools, scripts, or inspecting an
//! application's stores from outside the application.
//!
//! Every helper takes the directory holding the store files, usually
//! [`storage_dir`](crate::storage_dir) for the application, and the store
//! name. They go straight to disk: a `JsonContext` that already has the same store
//! open keeps serving its cached entries until it is reloaded.

use crate::storage::{checked_store_path, load_entries_async, modify_entries};
use preferred::{PreferenceValue, StoreError};
use std::path::Path;

/// Read a typed value from a store
///
/// # Returns
///
/// Returns `Ok(None)` if the key is missing or holds a different type.
///
/// # Errors
///
/// Returns an error if the store name is invalid or the store file cannot
/// be read or parsed.
///
/// # Example
///
/// ```ignore
/// use preferred_json_store::{AppName, read_value, storage_dir};
///
/// async fn font_size() -> Result<i32, preferred::StoreError> {
///     let dir = storage_dir(&AppName::new("com", "example", "myapp"));
///     let size = read_value::<i32>(&dir, "com.example.myapp_preferences", "font_size").await?;
///     Ok(size.unwrap_or(14))
/// }
/// ```
pub async fn read_value<T>(dir: &Path, store: &str, key: &str) -> Result<Option<T>, StoreError>
where
    T: PreferenceValue,
{
    let entries = load_entries_async(&checked_store_path(dir, store)?).await?;
    Ok(entries.get(key).cloned().and_then(T::from_value))
}

/// Write a typed value to a store
///
/// # Errors
///
/// Returns an error if the store file cannot be read or written.
///
/// # Example
///
/// ```ignore
/// use preferred_json_store::{AppName, storage_dir, write_value};
///
/// async fn enable_dark_mode() -> Result<(), preferred::StoreError> {
///     let dir = storage_dir(&AppName::new("com", "example", "myapp"));
///     write_value(&dir, "com.example.myapp_preferences", "dark_mode", true).await
/// }
/// ```
pub async fn write_value<T>(dir: &Path, store: &str, key: &str, value: T) -> Result<(), StoreError>
where
    T: PreferenceValue,
{
    let value = value.into_value();
    modify_entries(&checked_store_path(dir, store)?, |entries| {
        entries.insert(key.to_string(), value);
        true
    })
    .await?;

    Ok(())
}

/// Delete a value from a store
///
/// # Returns
///
/// Returns `Ok(true)` if the value was deleted, `Ok(false)` if it didn't exist.
pub async fn delete_value(dir: &Path, store: &str, key: &str) -> Result<bool, StoreError> {
    modify_entries(&checked_store_path(dir, store)?, |entries| {
        entries.remove(key).is_some()
    })
    .await
}

/// Check if a key exists in a store
pub async fn has_value(dir: &Path, store: &str, key: &str) -> Result<bool, StoreError> {
    let entries = load_entries_async(&checked_store_path(dir, store)?).await?;
    Ok(entries.contains_key(key))
}

/// List all keys in a store, in sorted order
pub async fn list_keys(dir: &Path, store: &str) -> Result<Vec<String>, StoreError> {
    let entries = load_entries_async(&checked_store_path(dir, store)?).await?;
    Ok(entries.keys().cloned().collect())
}
