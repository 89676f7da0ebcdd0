//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs (content, furniture, framed block tags)
//! - `state`: Per-walk traversal state kept in a side table
//! - `text`: `TextNode` and `NodeSequence`
//! - `walker`: Iterative depth-first walk emitting text nodes
//! - `merger`: Fixed-point merging of traversal-adjacent sequences
//! - `classifier`: Windowed belief/disbelief scoring
//! - `pipeline`: Orchestration of the above
//!
//! # Usage
//!
//! ```rust
//! use textsift::extractor::{merge_sequences, ContentClassifier, NodeSequence, TreeWalker};
//! use textsift::{Node, Options};
//!
//! let root = Node::new("div")
//!     .with_child(Node::new("p").with_text("First paragraph."))
//!     .with_child(Node::new("p").with_text("Second paragraph."));
//!
//! // Or use individual components:
//! let walk = TreeWalker::new(&root).walk()?;
//! let sequences = merge_sequences(walk.nodes.into_iter().map(NodeSequence::singleton).collect());
//! assert_eq!(sequences.len(), 1);
//!
//! let options = Options::default();
//! let classifier = ContentClassifier::new(&options);
//! let verdict = classifier.assess(&sequences, 0);
//! println!("certainty: {}", verdict.certainty());
//! # Ok::<(), textsift::Error>(())
//! ```

pub mod classifier;
pub mod merger;
pub mod pipeline;
pub mod state;
pub mod tags;
pub mod text;
pub mod walker;

pub use classifier::{ContentClassifier, Evidence, Signal, Verdict};
pub use merger::merge_sequences;
pub use pipeline::{extract_sequences, join_text};
pub use state::{TraversalState, TraversalTable, Transition};
pub use text::{NodeSequence, TextNode};
pub use walker::{TreeWalker, Walk};
