//! Settings screen backed by a JSON store
//!
//! Every control writes through to `<config dir>/prefs/<package>_preferences.json`
//! as soon as it changes, so restarting the app shows the last values.
//!
//! To run this example:
//! ```sh
//! RUST_LOG=preferred=debug cargo run --example settings_screen
//! ```

use iced::widget::{column, container, text};
use iced::{Element, Length, Task};
use preferred::widget::{ChoiceEntry, ChoiceSetting, Setting};
use preferred::{Preferences, PreferencesBuilder, StringSet};
use preferred_iced::{Choice, MultiChoice, Slider, TextField, Toggle};
use preferred_json_store::{AppName, JsonContext};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let context = JsonContext::new(AppName::new("com", "example", "settings_screen"));
    tracing::info!(dir = %context.base_dir().display(), "storing preferences");

    let prefs = PreferencesBuilder::new()
        .set_context(context)
        .set_use_default_name(true)
        .build()?;

    let app = App::bind(prefs)?;

    iced::application(move || (app.clone(), Task::none()), App::update, App::view).run()?;
    Ok(())
}

#[derive(Clone)]
struct App {
    notifications: Setting<Toggle>,
    nickname: Setting<TextField>,
    theme: ChoiceSetting<Choice>,
    channels: Setting<MultiChoice>,
    font_size: Setting<Slider>,
}

#[derive(Debug, Clone)]
enum Message {
    NotificationsToggled(bool),
    NicknameChanged(String),
    ThemeSelected(String),
    ChannelsChanged(StringSet),
    FontSizeChanged(i32),
}

impl App {
    fn bind(prefs: Preferences) -> Result<App, preferred::PreferencesError> {
        let mut notifications =
            Setting::new(Toggle::new("notifications", "Enable notifications"), prefs.clone())?;
        notifications.sync_from_store();
        notifications.add_listener(Arc::new(|on: &bool| {
            tracing::info!(enabled = on, "notifications changed");
        }));

        let mut nickname = Setting::new(
            TextField::new("nickname", "Nickname").placeholder("How should we call you?"),
            prefs.clone(),
        )?;
        nickname.sync_from_store();

        let theme = ChoiceSetting::new(
            Choice::new(
                "theme",
                "Theme",
                vec![
                    ChoiceEntry::new("Follow system", "system"),
                    ChoiceEntry::new("Light", "light"),
                    ChoiceEntry::new("Dark", "dark"),
                ],
            ),
            prefs.clone(),
        )?;
        theme.add_listener(Arc::new(|value: &String| {
            tracing::info!(theme = %value, "theme changed");
        }));

        let mut channels = Setting::new(
            MultiChoice::new(
                "channels",
                "Notify me about",
                vec![
                    ChoiceEntry::new("New releases", "releases"),
                    ChoiceEntry::new("Security advisories", "security"),
                    ChoiceEntry::new("Newsletter", "newsletter"),
                ],
            ),
            prefs.clone(),
        )?;
        channels.sync_from_store();

        let mut font_size = Setting::new(Slider::new("font_size", "Font size", 10..=24), prefs.clone())?;
        if prefs.contains("font_size") {
            font_size.sync_from_store();
        }

        Ok(App {
            notifications,
            nickname,
            theme,
            channels,
            font_size,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NotificationsToggled(on) => {
                self.notifications.change(on);
            }
            Message::NicknameChanged(value) => {
                self.nickname.change(value);
            }
            Message::ThemeSelected(value) => {
                self.theme.change(value);
            }
            Message::ChannelsChanged(selected) => {
                self.channels.change(selected);
            }
            Message::FontSizeChanged(size) => {
                self.font_size.change(size);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("Settings").size(32),
            self.notifications
                .control()
                .view(Message::NotificationsToggled),
            self.nickname.control().view(Message::NicknameChanged),
            self.theme.control().view(Message::ThemeSelected),
            self.channels.control().view(Message::ChannelsChanged),
            self.font_size.control().view(Message::FontSizeChanged),
        ]
        .spacing(20)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
