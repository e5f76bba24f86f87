//! Configuration model for the Breeze build pipeline.
//!
//! This module defines the Config struct that represents a `breeze.config.json`
//! (or `.yaml`) file. Parsing is strict: unknown fields and type mismatches are
//! rejected at the boundary, and glob patterns and screen bounds are validated
//! before a Config is handed to any consumer.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, PurgeOptions, Theme, Variants};
pub use types::{DarkMode, ScreenBound};
