//! Builder that resolves a store name and opens preferences

use crate::error::PreferencesError;
use crate::preferences::Preferences;
use crate::slot::PreferencesSlot;
use crate::store::Context;
use std::sync::Arc;

/// Suffix appended to the store name when the default name is requested
pub const DEFAULT_SUFFIX: &str = "_preferences";

/// Builder pattern for constructing [`Preferences`]
///
/// The store name is resolved from, in order: an explicit non-empty name set
/// with [`set_store_name`](Self::set_store_name), then the context's package
/// name. With [`set_use_default_name`](Self::set_use_default_name) enabled,
/// [`DEFAULT_SUFFIX`] is appended to whichever name was resolved.
///
/// # Example
///
/// ```
/// use preferred::{MemoryContext, PreferencesBuilder};
///
/// let prefs = PreferencesBuilder::new()
///     .set_context(MemoryContext::new("com.example.app"))
///     .set_use_default_name(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(prefs.name(), "com.example.app_preferences");
/// ```
#[derive(Clone, Default)]
pub struct PreferencesBuilder {
    store_name: Option<String>,
    context: Option<Arc<dyn Context>>,
    use_default_name: bool,
}

impl PreferencesBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the store to open
    pub fn set_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Context used to resolve the package name and open the store
    pub fn set_context<C>(mut self, context: C) -> Self
    where
        C: Context + 'static,
    {
        self.context = Some(Arc::new(context));
        self
    }

    /// Context shared with other parts of the application
    pub fn set_shared_context(mut self, context: Arc<dyn Context>) -> Self {
        self.context = Some(context);
        self
    }

    /// Append [`DEFAULT_SUFFIX`] to the resolved name
    pub fn set_use_default_name(mut self, use_default_name: bool) -> Self {
        self.use_default_name = use_default_name;
        self
    }

    /// Resolve the name of the store `build` would open
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::MissingContext`] if no context was set.
    pub fn resolve_name(&self) -> Result<String, PreferencesError> {
        let context = self
            .context
            .as_ref()
            .ok_or(PreferencesError::MissingContext)?;

        let mut name = match self.store_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => context.package_name(),
        };

        if self.use_default_name {
            name.push_str(DEFAULT_SUFFIX);
        }

        Ok(name)
    }

    /// Open the store and return preferences bound to it
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::MissingContext`] if no context was set, or
    /// [`PreferencesError::Open`] if the context cannot open the store.
    pub fn build(&self) -> Result<Preferences, PreferencesError> {
        let name = self.resolve_name()?;
        let context = self
            .context
            .as_ref()
            .ok_or(PreferencesError::MissingContext)?;

        let store = context
            .open_store(&name)
            .map_err(|source| PreferencesError::Open {
                name: name.clone(),
                source,
            })?;

        tracing::debug!(store = %name, "opened preferences");
        Ok(Preferences::new(name, store))
    }

    /// Build preferences and install them into `slot`, replacing any
    /// previous instance
    pub fn install(&self, slot: &PreferencesSlot) -> Result<Preferences, PreferencesError> {
        let preferences = self.build()?;
        slot.install(preferences.clone());
        Ok(preferences)
    }
}
