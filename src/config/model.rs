//! Config struct definition and nested section structs.

use super::types::{DarkMode, ScreenBound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the Breeze build pipeline.
///
/// This struct represents the contents of `breeze.config.json` (or `.yaml`).
/// Parsing is strict: unknown fields are rejected so that a typo in the config
/// surfaces at load time rather than silently changing build behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for the files the build tool scans for class usage.
    pub content: Vec<String>,

    /// Purge (tree-shaking) settings for generated output.
    pub purge: PurgeOptions,

    /// Dark-mode strategy: disabled, media-query driven, or class driven.
    pub dark_mode: DarkMode,

    /// Theme overrides. Currently the responsive breakpoint table.
    pub theme: Theme,

    /// Variant extension points keyed by utility category.
    pub variants: Variants,

    /// Plugin references, applied by the build tool in order.
    pub plugins: Vec<String>,
}

/// Purge settings: whether unused output is removed, and which files are
/// scanned to decide what counts as used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PurgeOptions {
    /// Whether purging is enabled.
    pub enabled: bool,

    /// Glob patterns for the files scanned during purging.
    ///
    /// Often duplicates the top-level `content` list; both are kept as
    /// written and validated independently.
    pub content: Vec<String>,
}

/// Theme overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Responsive breakpoints keyed by name.
    pub screens: BTreeMap<String, ScreenBound>,
}

/// Variant extension points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Variants {
    /// Extra variants per utility category, applied in order.
    pub extend: BTreeMap<String, Vec<String>>,
}
