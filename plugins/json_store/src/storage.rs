//! Storage operations for persisting stores to disk
//!
//! Each store is one pretty-printed JSON object mapping preference names to
//! typed values, written to `<name>.json`.

use crate::app_name::AppName;
use preferred::{StoreError, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Entries of one store, by name
pub type Entries = BTreeMap<String, Value>;

/// Get the storage directory for the application
///
/// Uses platform-specific conventions:
/// - Linux: `$XDG_CONFIG_HOME/<app>/prefs` or `~/.config/<app>/prefs`
/// - macOS: `~/Library/Application Support/<qualifier>.<org>.<app>/prefs`
/// - Windows: `%LOCALAPPDATA%\<org>\<app>\config\prefs`
pub fn storage_dir(app_name: &AppName) -> PathBuf {
    directories::ProjectDirs::from(
        app_name.qualifier.as_str(),
        app_name.organization.as_str(),
        app_name.application.as_str(),
    )
    .map(|dirs| dirs.config_local_dir().to_path_buf())
    .unwrap_or_else(|| PathBuf::from("."))
    .join("prefs")
}

/// Get the file path for a named store inside `dir`
pub fn store_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

/// Reject store names that are empty or would resolve outside their directory
pub fn check_store_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// [`store_path`] for a name that passed [`check_store_name`]
pub(crate) fn checked_store_path(dir: &Path, name: &str) -> Result<PathBuf, StoreError> {
    check_store_name(name)?;
    Ok(store_path(dir, name))
}

fn parse(contents: &str) -> Result<Entries, StoreError> {
    if contents.trim().is_empty() {
        return Ok(Entries::new());
    }

    serde_json::from_str(contents).map_err(|e| StoreError::Format(e.to_string()))
}

fn render(entries: &Entries) -> Result<String, StoreError> {
    // JSON has no NaN or infinity; serde_json would write them as null.
    if let Some((key, _)) = entries
        .iter()
        .find(|(_, value)| matches!(value, Value::Float(f) if !f.is_finite()))
    {
        return Err(StoreError::Format(format!(
            "'{}' holds a non-finite float",
            key
        )));
    }

    serde_json::to_string_pretty(entries).map_err(|e| StoreError::Format(e.to_string()))
}

fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Load a store from disk
///
/// Returns an empty map if the file doesn't exist or is empty.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_entries(path: &Path) -> Result<Entries, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
        Err(e) => Err(StoreError::Io(e)),
    }
}

/// Save a store to disk
///
/// Creates the storage directory if it doesn't exist. The data is written to
/// a sibling temp file first and renamed over the store file, so readers see
/// either the old or the new contents.
pub fn save_entries(path: &Path, entries: &Entries) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = render(entries)?;
    let temp = temp_path(path);
    fs::write(&temp, contents)?;
    fs::rename(&temp, path)?;

    Ok(())
}

/// Async variant of [`load_entries`]
pub async fn load_entries_async(path: &Path) -> Result<Entries, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => parse(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
        Err(e) => Err(StoreError::Io(e)),
    }
}

/// Async variant of [`save_entries`]
pub async fn save_entries_async(path: &Path, entries: &Entries) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let contents = render(entries)?;
    let temp = temp_path(path);
    tokio::fs::write(&temp, contents).await?;
    tokio::fs::rename(&temp, path).await?;

    Ok(())
}

/// Modify a store by loading it, applying a modification function, and saving it back
///
/// The modifier returns `true` if it changed the data; the store is only
/// written in that case.
///
/// # Returns
///
/// Returns `Ok(true)` if the data was modified and saved, `Ok(false)` if not modified.
pub async fn modify_entries<F>(path: &Path, modifier: F) -> Result<bool, StoreError>
where
    F: FnOnce(&mut Entries) -> bool,
{
    let mut entries = load_entries_async(path).await?;
    let modified = modifier(&mut entries);

    if modified {
        save_entries_async(path, &entries).await?;
    }

    Ok(modified)
}
