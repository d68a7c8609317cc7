//! Error types for preference access and storage

use thiserror::Error;

/// Errors raised while opening or committing to a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted data could not be encoded or decoded
    #[error("store data is malformed: {0}")]
    Format(String),

    /// The store rejects writes
    #[error("store '{0}' is read-only")]
    ReadOnly(String),

    /// The store name cannot be used to locate a store
    #[error("invalid store name '{0}'")]
    InvalidName(String),
}

/// Errors raised by the preferences layer
///
/// `NotInitialized` is the initialization error: an accessor was reached before
/// a builder installed preferences. `MissingContext` and `MissingKey` are
/// configuration errors raised at build and construction time.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// Preferences were requested before a builder installed them
    #[error("preferences have not been initialized, install a PreferencesBuilder first")]
    NotInitialized,

    /// `build()` was called without a context
    #[error("no context set, call set_context before building")]
    MissingContext,

    /// A setting widget was constructed without a key
    #[error("no key defined for this preference")]
    MissingKey,

    /// The named store could not be opened
    #[error("failed to open store '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl PreferencesError {
    /// Whether this error comes from incomplete configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PreferencesError::MissingContext | PreferencesError::MissingKey
        )
    }
}
