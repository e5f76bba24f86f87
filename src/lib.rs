//! Breeze config: typed loading and validation of the Breeze build-pipeline
//! settings object.
//!
//! The Breeze build tool is configured by a single settings file declaring
//! content-scanning globs, purge options, a dark-mode strategy, responsive
//! breakpoints, and variant/plugin extension points. This crate parses that
//! file (JSON or YAML), rejects malformed input at the boundary, and exposes
//! the result as an immutable [`Config`] behind a [`ConfigDescriptor`].
//!
//! Scanning files, generating CSS, purging unused output, and running plugins
//! are the build tool's job; this crate only holds the settings that drive
//! them.
//!
//! ```
//! use breeze_config::{ConfigDescriptor, ConfigSource};
//!
//! let mut descriptor = ConfigDescriptor::new();
//! let config = descriptor.load(ConfigSource::Json(
//!     r#"{ "content": ["./public/**/*.html"], "darkMode": false }"#.to_string(),
//! ))?;
//!
//! assert!(!config.dark_mode.is_enabled());
//! assert!(config.content_matcher()?.is_match("./public/index.html"));
//! # Ok::<(), breeze_config::ConfigError>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod validate;

pub use config::{Config, DarkMode, PurgeOptions, ScreenBound, Theme, Variants};
pub use descriptor::{ConfigDescriptor, ConfigSource};
pub use error::{ConfigError, Result};
