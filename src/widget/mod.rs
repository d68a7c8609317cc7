//! Setting widgets that persist their value on change
//!
//! A widget wraps a toolkit control implementing [`PreferenceControl`]. Each
//! value the user proposes is committed through [`Preferences`](crate::Preferences),
//! shown on the control, and then handed to every registered listener in
//! registration order.

mod choice;
mod control;
mod listeners;
mod setting;

pub use choice::ChoiceSetting;
pub use control::{ChoiceControl, ChoiceEntry, ChoiceState, ControlState, PreferenceControl};
pub use listeners::{ChangeListener, ListenerRef, Listeners};
pub use setting::Setting;
