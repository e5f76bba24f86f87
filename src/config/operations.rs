//! Config loading, validation, and serialization operations.

use super::model::Config;
use crate::error::{ConfigError, Result};
use crate::validate::globs;
use globset::GlobSet;
use std::path::Path;

impl Config {
    /// Load config from a file, choosing the format by extension.
    ///
    /// `.json` sources are parsed as JSON, `.yaml`/`.yml` as YAML; anything
    /// else is rejected before parsing.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ConfigError::Io)` - The file could not be read
    /// * `Err(ConfigError::Schema)` - Unsupported extension, parse error, or
    ///   schema violation
    /// * `Err(ConfigError::Pattern)` - Empty or malformed glob pattern
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(ConfigError::Schema(format!(
                "unsupported config extension for '{}': expected .json, .yaml, or .yml",
                path.display()
            ))),
        }
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| ConfigError::Schema(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ConfigError::Schema(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Schema(format!("failed to serialize config to JSON: {}", e)))
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Schema(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Shape, field types, and the darkMode enumeration are enforced during
    /// deserialization; this checks what the type system cannot:
    /// - `content` and `purge.content` entries must be non-empty, well-formed globs
    /// - every `theme.screens` bound must declare min or max, with CSS length values
    pub fn validate(&self) -> Result<()> {
        globs::ensure_glob_patterns(&self.content, "content")?;
        globs::ensure_glob_patterns(&self.purge.content, "purge.content")?;

        for (name, bound) in &self.theme.screens {
            bound.validate(name)?;
        }

        Ok(())
    }

    /// Compile the `content` globs into a matcher for the build tool.
    pub fn content_matcher(&self) -> Result<GlobSet> {
        globs::build_globset(&self.content, "content")
    }

    /// Compile the `purge.content` globs into a matcher for the build tool.
    pub fn purge_matcher(&self) -> Result<GlobSet> {
        globs::build_globset(&self.purge.content, "purge.content")
    }
}
