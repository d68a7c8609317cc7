//! Single-choice setting that keeps its summary label in sync

use super::control::ChoiceControl;
use super::listeners::{ListenerRef, Listeners};
use super::setting::Setting;
use crate::error::PreferencesError;
use crate::preferences::Preferences;

/// A [`Setting`] over a single-choice control
///
/// The summary shows the label of the persisted entry when constructed, or
/// the first entry when nothing matching is stored, and follows the
/// selection after every change.
#[derive(Clone, Debug)]
pub struct ChoiceSetting<C: ChoiceControl> {
    inner: Setting<C>,
}

impl<C: ChoiceControl> ChoiceSetting<C> {
    /// Bind `control` and show the persisted selection
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::MissingKey`] if the control has no key.
    pub fn new(control: C, preferences: Preferences) -> Result<Self, PreferencesError> {
        let mut inner = Setting::new(control, preferences)?;
        let persisted = inner.preference();

        let control = inner.control_mut();
        let label = control
            .entries()
            .iter()
            .find(|entry| !persisted.is_empty() && entry.value == persisted)
            .or_else(|| control.entries().first())
            .map(|entry| entry.label.clone());
        if !persisted.is_empty() {
            control.set_value(persisted);
        }
        control.set_summary(label.as_deref());

        Ok(Self { inner })
    }

    /// Handle a selection made by the user
    ///
    /// See [`Setting::change`]. The summary is refreshed from the entry the
    /// control shows afterwards.
    pub fn change(&mut self, new_value: String) -> bool {
        let committed = self.inner.change(new_value);
        self.refresh_summary();
        committed
    }

    fn refresh_summary(&mut self) {
        let control = self.inner.control_mut();
        let label = control.selected_entry().map(|entry| entry.label.clone());
        control.set_summary(label.as_deref());
    }

    pub fn preference(&self) -> String {
        self.inner.preference()
    }

    pub fn add_listener(&self, listener: ListenerRef<String>) {
        self.inner.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &ListenerRef<String>) -> bool {
        self.inner.remove_listener(listener)
    }

    /// Shared handle to the listener list
    pub fn listeners(&self) -> &Listeners<String> {
        self.inner.listeners()
    }

    pub fn key(&self) -> &str {
        self.inner.key()
    }

    pub fn control(&self) -> &C {
        self.inner.control()
    }

    /// The underlying setting
    pub fn setting(&self) -> &Setting<C> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::widget::{ChoiceEntry, ChoiceState};
    use std::sync::{Arc, Mutex};

    fn themes() -> Vec<ChoiceEntry> {
        vec![
            ChoiceEntry::new("Light", "light"),
            ChoiceEntry::new("Dark", "dark"),
            ChoiceEntry::new("System", "system"),
        ]
    }

    fn preferences() -> Preferences {
        Preferences::new("widgets", Arc::new(MemoryStore::new("widgets")))
    }

    #[test]
    fn summary_starts_at_first_entry_when_nothing_stored() {
        let setting = ChoiceSetting::new(ChoiceState::new("theme", themes()), preferences()).unwrap();
        assert_eq!(setting.control().summary.as_deref(), Some("Light"));
    }

    #[test]
    fn summary_starts_at_persisted_entry() {
        let prefs = preferences();
        assert!(prefs.put_string("theme", "dark"));

        let setting = ChoiceSetting::new(ChoiceState::new("theme", themes()), prefs).unwrap();
        assert_eq!(setting.control().summary.as_deref(), Some("Dark"));
        assert_eq!(setting.control().value, "dark");
    }

    #[test]
    fn unknown_persisted_value_falls_back_to_first_entry() {
        let prefs = preferences();
        assert!(prefs.put_string("theme", "sepia"));

        let setting = ChoiceSetting::new(ChoiceState::new("theme", themes()), prefs).unwrap();
        assert_eq!(setting.control().summary.as_deref(), Some("Light"));
    }

    #[test]
    fn change_refreshes_summary_and_notifies() {
        let prefs = preferences();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut setting =
            ChoiceSetting::new(ChoiceState::new("theme", themes()), prefs.clone()).unwrap();

        let log = Arc::clone(&seen);
        setting.add_listener(Arc::new(move |value: &String| {
            log.lock().unwrap().push(value.clone());
        }));

        assert!(setting.change("system".to_string()));
        assert_eq!(setting.control().summary.as_deref(), Some("System"));
        assert_eq!(setting.preference(), "system");
        assert_eq!(prefs.get_string("theme"), "system");
        assert_eq!(*seen.lock().unwrap(), vec!["system".to_string()]);
    }

    #[test]
    fn listeners_handle_reaches_registered_listeners() {
        let calls = Arc::new(Mutex::new(0));
        let mut setting =
            ChoiceSetting::new(ChoiceState::new("theme", themes()), preferences()).unwrap();

        let counter = Arc::clone(&calls);
        let listener: ListenerRef<String> = Arc::new(move |_: &String| {
            *counter.lock().unwrap() += 1;
        });
        setting.listeners().add(listener.clone());
        assert_eq!(setting.listeners().len(), 1);

        assert!(setting.change("dark".to_string()));
        assert!(setting.remove_listener(&listener));
        assert!(setting.listeners().is_empty());
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn missing_key_is_rejected() {
        let control = ChoiceState {
            key: None,
            entries: themes(),
            ..ChoiceState::default()
        };
        let err = ChoiceSetting::new(control, preferences()).unwrap_err();
        assert!(matches!(err, PreferencesError::MissingKey));
    }
}
