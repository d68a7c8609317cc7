//! Typed preferences over a key-value store
//!
//! A [`PreferencesBuilder`] resolves a store name, opens the store through a
//! [`Context`] and hands back [`Preferences`]: a cheap, cloneable handle with
//! typed get/put accessors for ints, booleans, longs, floats, strings and
//! string sets. The handle is passed explicitly to whatever needs it; a
//! [`PreferencesSlot`] covers components created before the builder runs.
//!
//! The [`widget`] module wraps toolkit controls so that every change the user
//! makes is written through the preferences and relayed to listeners.
//!
//! # Example
//!
//! ```
//! use preferred::{MemoryContext, PreferencesBuilder};
//!
//! let prefs = PreferencesBuilder::new()
//!     .set_store_name("testPrefs")
//!     .set_context(MemoryContext::new("com.example.app"))
//!     .build()
//!     .unwrap();
//!
//! assert!(prefs.put_boolean("flag", true));
//! assert!(prefs.get_boolean("flag"));
//! assert!(!prefs.get_boolean("absent"));
//!
//! assert!(prefs.clear());
//! assert!(prefs.all_entries().is_empty());
//! ```

mod builder;
mod editor;
mod error;
mod memory;
mod preferences;
mod slot;
mod store;
mod value;
pub mod widget;

pub use builder::{DEFAULT_SUFFIX, PreferencesBuilder};
pub use editor::Editor;
pub use error::{PreferencesError, StoreError};
pub use memory::{MemoryContext, MemoryStore};
pub use preferences::Preferences;
pub use slot::PreferencesSlot;
pub use store::{Change, Context, Store, Transaction};
pub use value::{PreferenceValue, StringSet, Value, ValueKind};
