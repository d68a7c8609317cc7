use iced::Element;
use iced::widget::checkbox;
use preferred::widget::PreferenceControl;

/// On/off control rendered as a checkbox
#[derive(Clone, Debug)]
pub struct Toggle {
    key: String,
    label: String,
    checked: bool,
}

impl Toggle {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            checked: false,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn view<'a, Message: 'a>(
        &'a self,
        on_toggle: impl Fn(bool) -> Message + 'a,
    ) -> Element<'a, Message> {
        checkbox(self.checked)
            .label(self.label.as_str())
            .on_toggle(on_toggle)
            .into()
    }
}

impl PreferenceControl for Toggle {
    type Value = bool;

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn value(&self) -> bool {
        self.checked
    }

    fn set_value(&mut self, value: bool) {
        self.checked = value;
    }
}
