//! Shareable holder for preferences that are installed after startup
//!
//! Components created before the builder runs can hold a clone of a
//! [`PreferencesSlot`] and resolve the preferences when they need them.

use crate::error::PreferencesError;
use crate::preferences::Preferences;
use std::sync::{Arc, RwLock};

/// Holds the installed [`Preferences`], if any
///
/// Clones share the same slot. Installing replaces whatever was there; when
/// several threads install at once the last one wins.
#[derive(Clone, Debug, Default)]
pub struct PreferencesSlot {
    inner: Arc<RwLock<Option<Preferences>>>,
}

impl PreferencesSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Install preferences, replacing any previous instance
    pub fn install(&self, preferences: Preferences) {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(previous) = inner.as_ref() {
            tracing::debug!(
                previous = previous.name(),
                next = preferences.name(),
                "replacing installed preferences"
            );
        }

        *inner = Some(preferences);
    }

    /// Whether preferences have been installed
    pub fn is_initialized(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.is_some())
            .unwrap_or(false)
    }

    /// Get the installed preferences
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::NotInitialized`] when nothing has been
    /// installed yet.
    pub fn get_or_fail(&self) -> Result<Preferences, PreferencesError> {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.clone().ok_or(PreferencesError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PreferencesBuilder;
    use crate::memory::MemoryContext;

    #[test]
    fn empty_slot_fails_with_initialization_error() {
        let slot = PreferencesSlot::new();

        assert!(!slot.is_initialized());
        let err = slot.get_or_fail().unwrap_err();
        assert!(matches!(err, PreferencesError::NotInitialized));
        assert!(!err.is_configuration());
    }

    #[test]
    fn install_overwrites_previous_instance() {
        let slot = PreferencesSlot::new();
        let context = std::sync::Arc::new(MemoryContext::new("com.example.app"));

        PreferencesBuilder::new()
            .set_shared_context(context.clone())
            .set_store_name("first")
            .install(&slot)
            .unwrap();
        PreferencesBuilder::new()
            .set_shared_context(context)
            .set_store_name("second")
            .install(&slot)
            .unwrap();

        assert_eq!(slot.get_or_fail().unwrap().name(), "second");
    }

    #[test]
    fn clones_observe_installation() {
        let slot = PreferencesSlot::new();
        let handle = slot.clone();

        PreferencesBuilder::new()
            .set_context(MemoryContext::new("com.example.app"))
            .install(&slot)
            .unwrap();

        assert!(handle.is_initialized());
        assert!(handle.get_or_fail().unwrap().put_int("count", 1));
        assert_eq!(slot.get_or_fail().unwrap().get_int("count"), 1);
    }
}
