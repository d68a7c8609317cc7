//! Setting widget that persists its control's value on every change

use super::control::PreferenceControl;
use super::listeners::{ListenerRef, Listeners};
use crate::error::PreferencesError;
use crate::preferences::Preferences;
use std::fmt;

/// Wraps a control and writes each change through [`Preferences`]
///
/// The value type decides the variant: a `bool` control is a switch or
/// checkbox, `String` a text field, `StringSet` a multi-choice list and `i32`
/// a slider. Single-choice lists use [`ChoiceSetting`](super::ChoiceSetting).
///
/// # Example
///
/// ```
/// use preferred::widget::{ControlState, Setting};
/// use preferred::{MemoryContext, PreferencesBuilder};
///
/// let prefs = PreferencesBuilder::new()
///     .set_context(MemoryContext::new("com.example.app"))
///     .build()
///     .unwrap();
///
/// let mut dark_mode = Setting::new(ControlState::<bool>::new("dark_mode"), prefs.clone()).unwrap();
/// assert!(dark_mode.change(true));
/// assert!(prefs.get_boolean("dark_mode"));
/// ```
///
/// Clones share the preferences and the listener list but each carry their
/// own control.
#[derive(Clone)]
pub struct Setting<C: PreferenceControl> {
    control: C,
    key: String,
    preferences: Preferences,
    listeners: Listeners<C::Value>,
}

impl<C> fmt::Debug for Setting<C>
where
    C: PreferenceControl + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("key", &self.key)
            .field("control", &self.control)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<C: PreferenceControl> Setting<C> {
    /// Bind `control` to the preference named by its key
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::MissingKey`] if the control has no key or
    /// an empty one.
    pub fn new(control: C, preferences: Preferences) -> Result<Self, PreferencesError> {
        let key = match control.key() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(PreferencesError::MissingKey),
        };

        Ok(Self {
            control,
            key,
            preferences,
            listeners: Listeners::new(),
        })
    }

    /// Handle a value proposed by the user
    ///
    /// The value is committed first. Only when the commit succeeds does the
    /// control show the new value and do listeners hear about it. Returns
    /// whether the commit succeeded. The value is first passed through
    /// [`PreferenceControl::constrain`].
    pub fn change(&mut self, new_value: C::Value) -> bool {
        let new_value = self.control.constrain(new_value);
        if !self.preferences.put(&self.key, new_value.clone()) {
            tracing::warn!(key = %self.key, "setting change was not persisted");
            return false;
        }

        self.control.set_value(new_value.clone());
        self.listeners.notify(&new_value);
        true
    }

    /// The persisted value, read through the preferences
    pub fn preference(&self) -> C::Value {
        self.preferences.get(&self.key)
    }

    /// Show the persisted value on the control
    pub fn sync_from_store(&mut self) {
        let value = self.preference();
        self.control.set_value(value);
    }

    pub fn add_listener(&self, listener: ListenerRef<C::Value>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&self, listener: &ListenerRef<C::Value>) -> bool {
        self.listeners.remove(listener)
    }

    /// Shared handle to the listener list
    pub fn listeners(&self) -> &Listeners<C::Value> {
        &self.listeners
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::value::StringSet;
    use crate::widget::ControlState;
    use std::sync::{Arc, Mutex};

    fn preferences() -> (Preferences, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new("widgets"));
        (Preferences::new("widgets", store.clone()), store)
    }

    #[test]
    fn missing_or_empty_key_is_a_configuration_error() {
        let (prefs, _) = preferences();

        let err = Setting::new(ControlState::<bool>::unbound(), prefs.clone()).unwrap_err();
        assert!(matches!(err, PreferencesError::MissingKey));
        assert!(err.is_configuration());

        let err = Setting::new(ControlState::<String>::new(""), prefs).unwrap_err();
        assert!(matches!(err, PreferencesError::MissingKey));
    }

    #[test]
    fn change_persists_updates_control_and_notifies() {
        let (prefs, _) = preferences();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut setting = Setting::new(ControlState::<String>::new("name"), prefs.clone()).unwrap();

        let log = Arc::clone(&seen);
        setting.add_listener(Arc::new(move |value: &String| {
            log.lock().unwrap().push(value.clone());
        }));

        assert!(setting.change("Ada".to_string()));
        assert_eq!(prefs.get_string("name"), "Ada");
        assert_eq!(setting.control().value, "Ada");
        assert_eq!(*seen.lock().unwrap(), vec!["Ada".to_string()]);
    }

    #[test]
    fn failed_commit_keeps_control_and_skips_listeners() {
        let (prefs, store) = preferences();
        let calls = Arc::new(Mutex::new(0));
        let mut setting = Setting::new(ControlState::<i32>::new("volume"), prefs).unwrap();

        let counter = Arc::clone(&calls);
        setting.add_listener(Arc::new(move |_: &i32| {
            *counter.lock().unwrap() += 1;
        }));

        store.set_read_only(true);
        assert!(!setting.change(11));
        assert_eq!(setting.control().value, 0);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn preference_reads_the_store_not_the_control() {
        let (prefs, _) = preferences();
        let mut setting =
            Setting::new(ControlState::<StringSet>::new("tags"), prefs.clone()).unwrap();

        let tags: StringSet = ["a", "b"].into_iter().map(String::from).collect();
        assert!(prefs.put_string_set("tags", tags.clone()));

        assert!(setting.control().value.is_empty());
        assert_eq!(setting.preference(), tags);

        setting.sync_from_store();
        assert_eq!(setting.control().value, tags);
    }

    #[test]
    fn clones_share_store_and_listeners() {
        let (prefs, _) = preferences();
        let calls = Arc::new(Mutex::new(0));
        let setting = Setting::new(ControlState::<bool>::new("flag"), prefs.clone()).unwrap();

        let counter = Arc::clone(&calls);
        setting.add_listener(Arc::new(move |_: &bool| {
            *counter.lock().unwrap() += 1;
        }));

        let mut copy = setting.clone();
        assert!(copy.change(true));
        assert!(copy.control().value);
        assert!(!setting.control().value);
        assert!(setting.preference());
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn removed_listener_is_not_notified() {
        let (prefs, _) = preferences();
        let calls = Arc::new(Mutex::new(0));
        let mut setting = Setting::new(ControlState::<bool>::new("flag"), prefs).unwrap();

        let counter = Arc::clone(&calls);
        let listener: ListenerRef<bool> = Arc::new(move |_: &bool| {
            *counter.lock().unwrap() += 1;
        });
        setting.add_listener(listener.clone());

        assert!(setting.change(true));
        assert!(setting.remove_listener(&listener));
        assert!(setting.change(false));
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
