//! CSS length syntax checking for screen bounds.

use regex::Regex;
use std::sync::LazyLock;

/// CSS-wide keywords accepted anywhere a length is expected.
const CSS_WIDE_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

/// A decimal number followed by a CSS length unit.
static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+|\d*\.\d+)(?:px|em|rem|ex|ch|vw|vh|vmin|vmax|cm|mm|Q|in|pt|pc|%)$")
        .expect("length pattern is a valid regex")
});

/// Check whether `value` is a syntactically valid CSS length or keyword.
///
/// Accepts a decimal number with a length unit (`550px`, `36rem`, `-0.5em`),
/// the unitless zero, and the CSS-wide keywords.
pub fn is_css_length(value: &str) -> bool {
    value == "0" || CSS_WIDE_KEYWORDS.contains(&value) || LENGTH.is_match(value)
}
