//! Compiled regex patterns and CSS selectors.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches leading/trailing whitespace on lines.
pub static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]+|[ \t]+$").expect("LINE_WHITESPACE regex")
});

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

// =============================================================================
// Root Selectors
// =============================================================================

/// Containers tried in order when choosing the walk root, most specific first.
pub const ROOT_SELECTORS: [&str; 5] = ["article", "[role='article']", "main", "[role='main']", "body"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \n\t  world", " ");
        assert_eq!(result, "hello world");
    }

    #[test]
    fn multiple_newlines_matches_three_or_more() {
        assert!(MULTIPLE_NEWLINES.is_match("a\n\n\nb"));
        assert!(!MULTIPLE_NEWLINES.is_match("a\n\nb"));
    }

    #[test]
    fn line_whitespace_strips_line_edges() {
        let result = LINE_WHITESPACE.replace_all("  one \n\ttwo\t", "");
        assert_eq!(result, "one\ntwo");
    }
}
