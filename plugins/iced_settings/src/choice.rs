use iced::Element;
use iced::widget::{column, pick_list, text};
use preferred::widget::{ChoiceControl, ChoiceEntry, PreferenceControl};

/// Single-choice control rendered as a pick list with a summary line
///
/// Wrap it in a [`ChoiceSetting`](preferred::widget::ChoiceSetting) so the
/// summary follows the persisted selection.
#[derive(Clone, Debug)]
pub struct Choice {
    key: String,
    label: String,
    entries: Vec<ChoiceEntry>,
    value: String,
    summary: Option<String>,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>, entries: Vec<ChoiceEntry>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            entries,
            value: String::new(),
            summary: None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// `on_select` receives the persisted value of the chosen entry
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        on_select: impl Fn(String) -> Message + 'a,
    ) -> Element<'a, Message> {
        let selected = self.selected_entry().cloned();
        let list = pick_list(self.entries.as_slice(), selected, move |entry: ChoiceEntry| {
            on_select(entry.value)
        });

        column![
            text(self.label.as_str()).size(14),
            list,
            text(self.summary.as_deref().unwrap_or_default()).size(12),
        ]
        .spacing(4)
        .into()
    }
}

impl PreferenceControl for Choice {
    type Value = String;

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

impl ChoiceControl for Choice {
    fn entries(&self) -> &[ChoiceEntry] {
        &self.entries
    }

    fn set_summary(&mut self, summary: Option<&str>) {
        self.summary = summary.map(str::to_string);
    }
}
