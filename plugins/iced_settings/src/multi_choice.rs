use iced::Element;
use iced::widget::{Column, checkbox, text};
use preferred::StringSet;
use preferred::widget::{ChoiceEntry, PreferenceControl};
use std::rc::Rc;

/// Multi-choice control rendered as one checkbox per entry
#[derive(Clone, Debug)]
pub struct MultiChoice {
    key: String,
    label: String,
    entries: Vec<ChoiceEntry>,
    selected: StringSet,
}

impl MultiChoice {
    pub fn new(key: impl Into<String>, label: impl Into<String>, entries: Vec<ChoiceEntry>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            entries,
            selected: StringSet::new(),
        }
    }

    pub fn selected(&self) -> &StringSet {
        &self.selected
    }

    /// The selection that results from toggling the entry with `value`
    pub fn toggled(&self, value: &str, on: bool) -> StringSet {
        let mut next = self.selected.clone();
        if on {
            next.insert(value.to_string());
        } else {
            next.remove(value);
        }
        next
    }

    /// `on_change` receives the complete new selection
    pub fn view<'a, Message: 'a>(
        &'a self,
        on_change: impl Fn(StringSet) -> Message + 'a,
    ) -> Element<'a, Message> {
        let on_change = Rc::new(on_change);

        let boxes = self.entries.iter().map(|entry| {
            let on_change = Rc::clone(&on_change);
            checkbox(self.selected.contains(&entry.value))
                .label(entry.label.as_str())
                .on_toggle(move |on| on_change(self.toggled(&entry.value, on)))
                .into()
        });

        Column::new()
            .push(text(self.label.as_str()).size(14))
            .extend(boxes)
            .spacing(4)
            .into()
    }
}

impl PreferenceControl for MultiChoice {
    type Value = StringSet;

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn value(&self) -> StringSet {
        self.selected.clone()
    }

    fn set_value(&mut self, value: StringSet) {
        self.selected = value;
    }
}
