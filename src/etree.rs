//! Element Tree (etree) model
//!
//! The extractor reads its input through the [`Element`] trait, which follows
//! the lxml-style text/tail model:
//! - **Text**: text content BEFORE the first child element
//! - **Tail**: text content AFTER the element's closing tag, up to the next sibling
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- This is div's "text" -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- This is span's "tail" -->
//! </div>
//! ```
//!
//! Implementations are read-only handles. The extractor never mutates the
//! tree; traversal bookkeeping is kept in a side table keyed by [`Element::id`].
//!
//! [`Node`] is an owned in-memory tree for callers that build their input by
//! hand (and for tests). The `dom_query` adapter lives in [`crate::dom`].

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// Read-only view of one element in a parsed document tree.
///
/// Handles are cloned onto the traversal stack, so they should be cheap to
/// clone (a reference or an index).
pub trait Element: Clone {
    /// Identity of an element within one tree.
    type Id: Copy + Eq + Hash + fmt::Debug;

    /// Identity used to key traversal state.
    fn id(&self) -> Self::Id;

    /// Lowercase tag name.
    fn tag(&self) -> Cow<'_, str>;

    /// Text before the first child element.
    fn text(&self) -> Cow<'_, str>;

    /// Text after the closing tag, before the next sibling element.
    fn tail(&self) -> Cow<'_, str>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;
}

/// Owned element with text, tail and children.
///
/// # Example
///
/// ```rust
/// use textsift::{extract, Node};
///
/// let root = Node::new("div")
///     .with_child(Node::new("h1").with_text("Release notes"))
///     .with_child(Node::new("button").with_text("OK"));
/// let sequences = extract(&root)?;
/// assert_eq!(sequences.len(), 0);
/// # Ok::<(), textsift::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    tag: String,
    text: String,
    tail: String,
    children: Vec<Node>,
}

impl Node {
    /// Create an element with the given tag and no text.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set the element's own text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the text following the element.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Append one child.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Child elements.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl<'a> Element for &'a Node {
    type Id = usize;

    fn id(&self) -> usize {
        std::ptr::from_ref::<Node>(*self) as usize
    }

    fn tag(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tag)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn tail(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tail)
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a Node = *self;
        node.children.iter().collect()
    }
}
