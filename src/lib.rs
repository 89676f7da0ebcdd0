//! # textsift
//!
//! Heuristic boilerplate removal over parsed HTML element trees.
//!
//! Given the root of an already-parsed document region, textsift walks the
//! tree, groups text that sits next to each other in traversal order, and
//! keeps the groups that look like article content rather than navigation,
//! scripts or short UI labels.
//!
//! ## Quick Start
//!
//! ```rust
//! use textsift::{extract, join_text, Node};
//!
//! let root = Node::new("article")
//!     .with_child(Node::new("div").with_child(Node::new("button").with_text("Subscribe")))
//!     .with_child(Node::new("p").with_text(
//!         "Volunteers planted more than four hundred trees along the river bank this \
//!          weekend as part of a project to reduce flooding in the lower part of town.",
//!     ));
//!
//! let sequences = extract(&root)?;
//! assert!(join_text(&sequences).starts_with("Volunteers planted"));
//! # Ok::<(), textsift::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Walk**: iterative depth-first traversal emitting one text node per
//!   element that has text of its own (text plus tail)
//! - **Merge**: text nodes exactly one traversal step apart are joined into
//!   sequences, repeated to a fixed point
//! - **Classify**: six signals add belief or disbelief per sequence; those
//!   with enough certainty are kept
//!
//! The input is read through the [`Element`] trait. [`Node`] is an owned tree
//! and [`dom`] adapts `dom_query` documents.

mod error;
mod options;
mod patterns;

/// Element trait (text/tail model) and owned element tree.
pub mod etree;

/// `dom_query` adapter and root selection.
pub mod dom;

/// Walker, merger, classifier and pipeline.
pub mod extractor;

// Public API - re-exports
pub use error::{Error, Result};
pub use etree::{Element, Node};
pub use extractor::{join_text, NodeSequence, TextNode};
pub use options::{AlphaRatioThresholds, Options, TimingThresholds, WordCountThresholds};

/// Extracts content sequences under `root` using default options.
///
/// # Example
///
/// ```rust
/// use textsift::{extract, Node};
///
/// let root = Node::new("div").with_child(Node::new("script").with_text("track();"));
/// assert!(extract(&root)?.is_empty());
/// # Ok::<(), textsift::Error>(())
/// ```
pub fn extract<E: Element>(root: E) -> Result<Vec<NodeSequence>> {
    extract_with_options(root, &Options::default())
}

/// Extracts content sequences under `root` with custom options.
///
/// # Example
///
/// ```rust
/// use textsift::{extract_with_options, Node, Options};
///
/// let root = Node::new("div").with_child(Node::new("p").with_text("Short note."));
/// let options = Options {
///     acceptance_threshold: 0.0,
///     ..Options::default()
/// };
/// let sequences = extract_with_options(&root, &options)?;
/// assert_eq!(sequences.len(), 1);
/// # Ok::<(), textsift::Error>(())
/// ```
pub fn extract_with_options<E: Element>(root: E, options: &Options) -> Result<Vec<NodeSequence>> {
    extractor::extract_sequences(root, options)
}
