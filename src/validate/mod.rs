//! Syntax validation helpers for configuration values.
//!
//! Glob patterns are checked and compiled with globset; screen bound values
//! are checked against a small CSS length grammar.

pub mod globs;
pub mod lengths;

pub use globs::{build_globset, ensure_glob_patterns};
pub use lengths::is_css_length;
