//! Batched writes against a store

use crate::store::{Change, Store, Transaction};
use crate::value::{PreferenceValue, StringSet};
use std::sync::Arc;

/// Collects changes and commits them to the store in one transaction
///
/// Nothing is written until [`Editor::commit`] is called.
///
/// # Example
///
/// ```ignore
/// let committed = prefs
///     .edit()
///     .put_string("theme", "dark")
///     .put_int("font_size", 14)
///     .remove("legacy_theme")
///     .commit();
/// ```
#[must_use = "an editor does nothing until it is committed"]
pub struct Editor {
    store: Arc<dyn Store>,
    transaction: Transaction,
}

impl Editor {
    pub(crate) fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            transaction: Transaction::default(),
        }
    }

    /// Queue a value of any supported type
    pub fn put<T: PreferenceValue>(mut self, key: impl Into<String>, value: T) -> Self {
        self.transaction.changes.push(Change::Put {
            key: key.into(),
            value: value.into_value(),
        });
        self
    }

    pub fn put_int(self, key: impl Into<String>, value: i32) -> Self {
        self.put(key, value)
    }

    pub fn put_boolean(self, key: impl Into<String>, value: bool) -> Self {
        self.put(key, value)
    }

    pub fn put_long(self, key: impl Into<String>, value: i64) -> Self {
        self.put(key, value)
    }

    pub fn put_float(self, key: impl Into<String>, value: f32) -> Self {
        self.put(key, value)
    }

    pub fn put_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, value.into())
    }

    pub fn put_string_set(self, key: impl Into<String>, value: StringSet) -> Self {
        self.put(key, value)
    }

    /// Queue the removal of `key`
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.transaction
            .changes
            .push(Change::Remove { key: key.into() });
        self
    }

    /// Discard every existing entry before the queued changes are applied
    pub fn clear(mut self) -> Self {
        self.transaction.clear = true;
        self
    }

    /// Number of queued changes, not counting a clear
    pub fn pending(&self) -> usize {
        self.transaction.changes.len()
    }

    /// Write the queued changes synchronously
    ///
    /// Returns whether the store accepted the commit. Failures are logged and
    /// never retried.
    pub fn commit(self) -> bool {
        let changes = self.transaction.changes.len();
        let clear = self.transaction.clear;

        match self.store.commit(self.transaction) {
            Ok(()) => {
                tracing::debug!(changes, clear, "committed preferences");
                true
            }
            Err(e) => {
                tracing::warn!(changes, clear, "failed to commit preferences: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::value::Value;

    #[test]
    fn nothing_is_written_before_commit() {
        let store = Arc::new(MemoryStore::new("prefs"));
        let editor = Editor::new(store.clone()).put_int("count", 3).remove("gone");

        assert_eq!(editor.pending(), 2);
        assert!(!store.contains("count"));

        assert!(editor.commit());
        assert_eq!(store.get("count"), Some(Value::Int(3)));
    }

    #[test]
    fn failed_commit_returns_false_and_writes_nothing() {
        let store = Arc::new(MemoryStore::new("prefs"));
        store.set_read_only(true);

        let committed = Editor::new(store.clone())
            .put_string("name", "value")
            .commit();

        assert!(!committed);
        assert!(store.entries().is_empty());
    }
}
