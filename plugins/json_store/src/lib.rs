//! JSON Store for preferred
//!
//! A file-backed store that persists each named store to its own JSON file
//! under the platform configuration directory.
//!
//! # Features
//!
//! - One `<name>.json` file per store
//! - In-memory cache, synchronous atomic commits
//! - Values keep their type on disk (`{"type": "long", "value": 15}`)
//! - Async standalone helpers for tools that only need to peek at a store
//!
//! # Example
//!
//! ```ignore
//! use preferred::PreferencesBuilder;
//! use preferred_json_store::{AppName, JsonContext};
//!
//! let prefs = PreferencesBuilder::new()
//!     .set_context(JsonContext::new(AppName::new("com", "example", "myapp")))
//!     .set_use_default_name(true)
//!     .build()?;
//!
//! prefs.put_string("theme", "dark");
//! ```

mod app_name;
mod context;
mod helpers;
mod storage;
mod store;

pub use app_name::AppName;
pub use context::JsonContext;
pub use helpers::{delete_value, has_value, list_keys, read_value, write_value};
pub use storage::{
    Entries, check_store_name, load_entries, save_entries, storage_dir, store_path,
};
pub use store::JsonStore;
