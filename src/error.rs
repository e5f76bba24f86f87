//! Error types for breeze-config.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use thiserror::Error;

/// Main error type for configuration loading and access.
///
/// `Schema` and `Pattern` cover the two ways a configuration source can be
/// rejected; `NotLoaded` covers API misuse on the descriptor; `Io` covers an
/// unreadable source file. None of these are retried or recovered internally.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Structural or type violation: wrong type for a field, an unrecognized
    /// key, an enumeration value outside the allowed set, an unsupported
    /// source extension, or an invalid screen bound.
    #[error("invalid config: {0}")]
    Schema(String),

    /// A glob pattern was empty or failed to parse.
    #[error("invalid glob: {0}")]
    Pattern(String),

    /// `get` was called before any successful `load`.
    #[error("configuration has not been loaded")]
    NotLoaded,

    /// The configuration source file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Display path of the file that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for breeze-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
