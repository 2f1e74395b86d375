//! Error types for link-fetcher.
//!
//! Extraction itself never fails; these errors come from the settings,
//! pattern and I/O layers around it.

/// Error type for settings, pattern and I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings failed validation. The message is user-facing.
    #[error("{0}")]
    InvalidSettings(String),

    /// A configured CSS selector could not be compiled.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector text as configured.
        selector: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A wildcard pattern could not be compiled.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// A settings file could not be parsed.
    #[error("Settings parsing failed: {0}")]
    ConfigParse(String),

    /// Reading a settings or page file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
