//! DOM adapter over `dom_query`.
//!
//! Exposes parsed `dom_query` nodes through the [`Element`] text/tail model so
//! the extractor can walk real HTML. Parsing and root selection are boundary
//! concerns; the extractor itself only ever sees [`Element`].

use std::borrow::Cow;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};
pub use tendril::StrTendril;

use crate::etree::Element;
use crate::extractor::text::NodeSequence;
use crate::patterns::ROOT_SELECTORS;
use crate::{Options, Result};

/// An element node of a `dom_query` document.
#[derive(Clone)]
pub struct DomElement<'a> {
    node: NodeRef<'a>,
    detached: bool,
}

impl<'a> DomElement<'a> {
    /// Wrap a node handle. Non-element nodes yield no tag, text or children.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Self {
        Self {
            node,
            detached: false,
        }
    }

    /// Wrap a node that a walk starts from.
    ///
    /// Its tail lies outside the chosen container and is reported empty.
    #[must_use]
    pub fn root(node: NodeRef<'a>) -> Self {
        Self {
            node,
            detached: true,
        }
    }

    /// The underlying `dom_query` node.
    #[must_use]
    pub fn node(&self) -> &NodeRef<'a> {
        &self.node
    }
}

impl<'a> Element for DomElement<'a> {
    type Id = NodeId;

    fn id(&self) -> NodeId {
        self.node.id
    }

    fn tag(&self) -> Cow<'_, str> {
        self.node
            .node_name()
            .map_or(Cow::Borrowed(""), |name| Cow::Owned(name.to_ascii_lowercase()))
    }

    /// Text children before the first element child. Comments and other
    /// non-element nodes are skipped rather than ending the text.
    fn text(&self) -> Cow<'_, str> {
        if !self.node.is_element() {
            return Cow::Borrowed("");
        }

        // Text children up to the first element child
        let mut out = StrTendril::new();
        for child in self.node.children() {
            if child.is_element() {
                break;
            }
            if child.is_text() {
                out.push_tendril(&child.text());
            }
        }
        Cow::Owned(out.to_string())
    }

    fn tail(&self) -> Cow<'_, str> {
        if self.detached {
            return Cow::Borrowed("");
        }

        // Text siblings up to the next element sibling
        let mut out = StrTendril::new();
        let mut sibling = self.node.next_sibling();
        while let Some(node) = sibling {
            if node.is_element() {
                break;
            }
            if node.is_text() {
                out.push_tendril(&node.text());
            }
            sibling = node.next_sibling();
        }
        Cow::Owned(out.to_string())
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .into_iter()
            .filter(NodeRef::is_element)
            .map(DomElement::new)
            .collect()
    }
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Choose the element to root the walk at.
///
/// Tries `article`, `[role='article']`, `main`, `[role='main']` and finally
/// `body`, returning the first match in document order. The returned root
/// reports no tail, so text after its closing tag is never extracted.
#[must_use]
pub fn content_root(doc: &Document) -> Option<DomElement<'_>> {
    ROOT_SELECTORS.iter().find_map(|selector| {
        doc.select(selector)
            .nodes()
            .first()
            .cloned()
            .map(DomElement::root)
    })
}

/// Parse `html`, choose a root with [`content_root`] and extract content.
///
/// # Example
///
/// ```rust
/// use textsift::{dom, Options};
///
/// let html = "<html><body><nav><a href='/'>Home</a></nav>\
///     <article><p>The committee met on Tuesday to review the annual budget and \
///     agreed that the library would keep its weekend opening hours for another \
///     full year after a long public consultation.</p></article></body></html>";
/// let sequences = dom::extract_html(html, &Options::default())?;
/// assert_eq!(sequences.len(), 1);
/// # Ok::<(), textsift::Error>(())
/// ```
pub fn extract_html(html: &str, options: &Options) -> Result<Vec<NodeSequence>> {
    let document = parse(html);
    match content_root(&document) {
        Some(root) => crate::extract_with_options(root, options),
        None => Ok(Vec::new()),
    }
}
