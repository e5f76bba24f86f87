//! Loaded-configuration descriptor.
//!
//! A [`ConfigDescriptor`] is the handle consumers share instead of an ambient
//! global: the build tool loads it once at startup and passes a reference to
//! every stage that needs settings. It has exactly two states, Unloaded and
//! Loaded, and the transition is one-way.

use crate::config::Config;
use crate::error::{ConfigError, Result};
use std::path::PathBuf;

/// A configuration source accepted by [`ConfigDescriptor::load`].
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// A config file on disk; format chosen by extension.
    Path(PathBuf),
    /// An inline JSON document.
    Json(String),
    /// An inline YAML document.
    Yaml(String),
    /// An already-built config value; still validated on load.
    Inline(Config),
}

impl ConfigSource {
    /// Convenience constructor for a file source.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }
}

/// Holder for the loaded configuration.
///
/// A fresh descriptor is Unloaded; [`get`](Self::get) fails with
/// [`ConfigError::NotLoaded`] until a [`load`](Self::load) succeeds. A failed
/// load leaves the descriptor's state untouched, so there is no partial
/// success. Consumers receive shared references only; nothing can mutate a
/// loaded config through the descriptor.
#[derive(Debug, Default)]
pub struct ConfigDescriptor {
    config: Option<Config>,
}

impl ConfigDescriptor {
    /// Create an unloaded descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate `source`, store the result, and return it.
    ///
    /// Loading again replaces the stored value; loading the same source twice
    /// yields field-for-field equal configs.
    pub fn load(&mut self, source: ConfigSource) -> Result<&Config> {
        let config = match source {
            ConfigSource::Path(path) => Config::load(path)?,
            ConfigSource::Json(json) => Config::from_json(&json)?,
            ConfigSource::Yaml(yaml) => Config::from_yaml(&yaml)?,
            ConfigSource::Inline(config) => {
                config.validate()?;
                config
            }
        };

        Ok(self.config.insert(config))
    }

    /// The loaded configuration.
    pub fn get(&self) -> Result<&Config> {
        self.config.as_ref().ok_or(ConfigError::NotLoaded)
    }

    /// Whether a configuration has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }
}
