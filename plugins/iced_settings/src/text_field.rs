use iced::Element;
use iced::widget::{column, text, text_input};
use preferred::widget::PreferenceControl;

/// Free-text control rendered as a labelled text input
#[derive(Clone, Debug)]
pub struct TextField {
    key: String,
    label: String,
    placeholder: String,
    value: String,
}

impl TextField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            placeholder: String::new(),
            value: String::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    /// Every keystroke is reported through `on_input`
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        on_input: impl Fn(String) -> Message + 'a,
    ) -> Element<'a, Message> {
        column![
            text(self.label.as_str()).size(14),
            text_input(&self.placeholder, &self.value).on_input(on_input),
        ]
        .spacing(4)
        .into()
    }
}

impl PreferenceControl for TextField {
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
