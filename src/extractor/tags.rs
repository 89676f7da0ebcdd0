//! Tag catalogs used by the extractor.
//!
//! Provides both arrays (for iteration and `Options` defaults) and `HashSet`s
//! (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags whose presence in a sequence is evidence of article content.
pub static CONTENT_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "h6", "p"];

/// Tags whose presence in a sequence is evidence of page furniture.
pub static FURNITURE_TAGS: [&str; 10] = [
    "script", "noscript", "style", "button", "time",
    "select", "option", "label", "textarea", "template",
];

/// Block tags rendered on their own lines in formatted text.
pub static FRAMED_TAGS: [&str; 16] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "blockquote", "pre",
    "li", "dt", "dd", "summary", "figcaption", "caption", "tr",
];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `FRAMED_TAGS` as a `HashSet`
pub static FRAMED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    FRAMED_TAGS.into_iter().collect()
});

// === Helper Functions ===

/// Check if tag gets its own line in formatted text
#[inline]
#[must_use]
pub fn is_framed_tag(tag: &str) -> bool {
    FRAMED_TAG_SET.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_tags() {
        assert!(is_framed_tag("p"));
        assert!(is_framed_tag("h2"));
        assert!(is_framed_tag("li"));
        assert!(!is_framed_tag("span"));
        assert!(!is_framed_tag("a"));
        assert!(!is_framed_tag("b"));
    }

    #[test]
    fn test_content_and_furniture_are_disjoint() {
        for tag in &CONTENT_TAGS {
            assert!(!FURNITURE_TAGS.contains(tag), "{tag} is in both catalogs");
        }
    }

    #[test]
    fn test_all_tags_in_sets() {
        for tag in &FRAMED_TAGS {
            assert!(FRAMED_TAG_SET.contains(tag), "Missing in set: {tag}");
        }
    }
}
