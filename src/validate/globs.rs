//! Glob pattern validation and compilation.

use crate::error::{ConfigError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Check that every pattern in `patterns` is a non-empty, well-formed glob.
///
/// `field` names the config field the patterns came from and appears in
/// error messages.
pub fn ensure_glob_patterns(patterns: &[String], field: &str) -> Result<()> {
    for pattern in patterns {
        parse_glob(pattern, field)?;
    }
    Ok(())
}

/// Compile a list of glob patterns into a single matcher.
///
/// Paths matched against the result are expected to use forward slashes.
pub fn build_globset(patterns: &[String], field: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        builder.add(parse_glob(pattern, field)?);
    }

    builder
        .build()
        .map_err(|e| ConfigError::Pattern(format!("failed to compile {} globs: {}", field, e)))
}

/// Parse a single pattern, rejecting empty strings before glob syntax errors.
fn parse_glob(pattern: &str, field: &str) -> Result<Glob> {
    if pattern.is_empty() {
        return Err(ConfigError::Pattern(format!("empty pattern in {}", field)));
    }

    Glob::new(pattern).map_err(|e| {
        ConfigError::Pattern(format!(
            "malformed pattern in {}: '{}' - {}",
            field, pattern, e
        ))
    })
}
