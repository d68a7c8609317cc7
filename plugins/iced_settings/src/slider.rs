use iced::Element;
use iced::widget::{column, slider, text};
use preferred::widget::PreferenceControl;
use std::ops::RangeInclusive;

/// Integer control rendered as a slider; values outside the range are clamped
#[derive(Clone, Debug)]
pub struct Slider {
    key: String,
    label: String,
    range: RangeInclusive<i32>,
    value: i32,
}

impl Slider {
    pub fn new(key: impl Into<String>, label: impl Into<String>, range: RangeInclusive<i32>) -> Self {
        let value = *range.start();
        Self {
            key: key.into(),
            label: label.into(),
            range,
            value,
        }
    }

    pub fn range(&self) -> &RangeInclusive<i32> {
        &self.range
    }

    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        on_change: impl Fn(i32) -> Message + 'a,
    ) -> Element<'a, Message> {
        column![
            text(format!("{}: {}", self.label, self.value)).size(14),
            slider(self.range.clone(), self.value, on_change),
        ]
        .spacing(4)
        .into()
    }
}

impl PreferenceControl for Slider {
    type Value = i32;

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn set_value(&mut self, value: i32) {
        self.value = self.constrain(value);
    }

    fn constrain(&self, value: i32) -> i32 {
        let clamped = value.clamp(*self.range.start(), *self.range.end());
        if clamped != value {
            tracing::debug!(key = %self.key, value, clamped, "slider value out of range");
        }
        clamped
    }
}
