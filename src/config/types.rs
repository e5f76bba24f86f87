//! Configuration value types.
//!
//! This module defines the dark-mode enumeration and the screen bound
//! descriptor used by the Config struct, including their wire representations.

use crate::error::{ConfigError, Result};
use crate::validate::lengths::is_css_length;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Dark-mode strategy.
///
/// Serialized as the boolean `false` when disabled, or as the strings
/// `"media"` / `"class"` when enabled. The boolean `true` is rejected at
/// parse time: enabling dark mode requires picking a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkMode {
    /// Dark mode is disabled (serialized as `false`).
    #[default]
    Disabled,
    /// Dark variants are scoped by a `prefers-color-scheme` media query.
    Media,
    /// Dark variants are scoped by a `dark` class on an ancestor element.
    Class,
}

impl DarkMode {
    /// Parse a dark-mode strategy from its string form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "media" => Some(Self::Media),
            "class" => Some(Self::Class),
            _ => None,
        }
    }

    /// Whether any dark-mode strategy is active.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Media => serializer.serialize_str("media"),
            Self::Class => serializer.serialize_str("class"),
        }
    }
}

impl<'de> Deserialize<'de> for DarkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DarkModeVisitor;

        impl Visitor<'_> for DarkModeVisitor {
            type Value = DarkMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("false, \"media\", or \"class\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<DarkMode, E> {
                if v {
                    Err(E::custom(
                        "darkMode cannot be `true`; use \"media\" or \"class\" to enable it",
                    ))
                } else {
                    Ok(DarkMode::Disabled)
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<DarkMode, E> {
                DarkMode::from_str(v).ok_or_else(|| {
                    E::custom(format!(
                        "unrecognized darkMode value '{}'; expected false, \"media\", or \"class\"",
                        v
                    ))
                })
            }
        }

        deserializer.deserialize_any(DarkModeVisitor)
    }
}

/// A responsive breakpoint bound.
///
/// At least one of `min`/`max` must be present; each value must be a CSS
/// length (e.g. `550px`, `36rem`, `0`) or a CSS-wide keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenBound {
    /// Lower viewport-width bound, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    /// Upper viewport-width bound, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl ScreenBound {
    /// Create a min-only bound.
    pub fn min(value: impl Into<String>) -> Self {
        Self {
            min: Some(value.into()),
            max: None,
        }
    }

    /// Create a max-only bound.
    pub fn max(value: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(value.into()),
        }
    }

    /// Validate the bound values for the screen named `name`.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.min.is_none() && self.max.is_none() {
            return Err(ConfigError::Schema(format!(
                "screen '{}' must declare a min or max bound",
                name
            )));
        }

        for (side, value) in [("min", &self.min), ("max", &self.max)] {
            if let Some(value) = value {
                if !is_css_length(value) {
                    return Err(ConfigError::Schema(format!(
                        "screen '{}' {} bound '{}' is not a CSS length or keyword",
                        name, side, value
                    )));
                }
            }
        }

        Ok(())
    }
}
