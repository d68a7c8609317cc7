//! The capability a UI toolkit control provides to a setting widget

use crate::value::PreferenceValue;
use std::fmt;

/// A toolkit control that displays one preference
///
/// Setting widgets hold a control instead of extending it: the control
/// reports its key and shows whatever value the widget hands it.
pub trait PreferenceControl {
    /// Type of the value this control edits
    type Value: PreferenceValue;

    /// Key the control is bound to, as declared by the UI definition
    fn key(&self) -> Option<&str>;

    /// Value currently shown
    fn value(&self) -> Self::Value;

    /// Show a new value
    fn set_value(&mut self, value: Self::Value);

    /// Map a proposed value onto one this control can show
    ///
    /// Applied before the value is persisted, so the store, the control and
    /// listeners all see the same value. The default accepts any value.
    fn constrain(&self, value: Self::Value) -> Self::Value {
        value
    }
}

/// One selectable entry of a single-choice control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceEntry {
    /// Human-readable label shown to the user
    pub label: String,
    /// Value persisted when the entry is selected
    pub value: String,
}

impl ChoiceEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ChoiceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A control that selects one entry out of a fixed list
pub trait ChoiceControl: PreferenceControl<Value = String> {
    /// The selectable entries, in display order
    fn entries(&self) -> &[ChoiceEntry];

    /// Replace the summary label shown under the control
    fn set_summary(&mut self, summary: Option<&str>);

    /// The entry whose value is currently shown
    fn selected_entry(&self) -> Option<&ChoiceEntry> {
        let value = self.value();
        self.entries().iter().find(|entry| entry.value == value)
    }
}

/// Toolkit-independent control that simply holds its state
///
/// Useful headless, in tests, or as the model behind a custom view.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlState<T> {
    pub key: Option<String>,
    pub value: T,
}

impl<T: PreferenceValue> ControlState<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: T::zero(),
        }
    }

    /// A control that declares no key
    pub fn unbound() -> Self {
        Self {
            key: None,
            value: T::zero(),
        }
    }
}

impl<T: PreferenceValue> PreferenceControl for ControlState<T> {
    type Value = T;

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn value(&self) -> T {
        self.value.clone()
    }

    fn set_value(&mut self, value: T) {
        self.value = value;
    }
}

/// Toolkit-independent single-choice control
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChoiceState {
    pub key: Option<String>,
    pub entries: Vec<ChoiceEntry>,
    pub value: String,
    pub summary: Option<String>,
}

impl ChoiceState {
    pub fn new(key: impl Into<String>, entries: Vec<ChoiceEntry>) -> Self {
        Self {
            key: Some(key.into()),
            entries,
            ..Self::default()
        }
    }
}

impl PreferenceControl for ChoiceState {
    type Value = String;

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

impl ChoiceControl for ChoiceState {
    fn entries(&self) -> &[ChoiceEntry] {
        &self.entries
    }

    fn set_summary(&mut self, summary: Option<&str>) {
        self.summary = summary.map(str::to_string);
    }
}
