//! Setting Controls for Iced
//!
//! Iced controls that plug into `preferred` setting widgets. Each control
//! keeps the state it renders and implements
//! [`PreferenceControl`](preferred::widget::PreferenceControl), so wrapping it
//! in a [`Setting`](preferred::widget::Setting) makes every change persist
//! and reach the setting's listeners.
//!
//! | Control | Value | Widget |
//! |---------|-------|--------|
//! | [`Toggle`] | `bool` | checkbox |
//! | [`TextField`] | `String` | text input |
//! | [`Choice`] | `String` | pick list with summary |
//! | [`MultiChoice`] | `StringSet` | checkbox per entry |
//! | [`Slider`] | `i32` | slider |
//!
//! # Example
//!
//! ```ignore
//! use preferred::widget::Setting;
//! use preferred_iced::Toggle;
//!
//! let mut dark_mode = Setting::new(Toggle::new("dark_mode", "Dark mode"), prefs.clone())?;
//! dark_mode.sync_from_store();
//!
//! // in update()
//! Message::DarkMode(on) => {
//!     dark_mode.change(on);
//! }
//!
//! // in view()
//! dark_mode.control().view(Message::DarkMode)
//! ```

mod choice;
mod multi_choice;
mod slider;
mod text_field;
mod toggle;

pub use choice::Choice;
pub use multi_choice::MultiChoice;
pub use preferred::widget::ChoiceEntry;
pub use slider::Slider;
pub use text_field::TextField;
pub use toggle::Toggle;
