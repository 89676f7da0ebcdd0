//! Text fragments produced by the walk and the sequences built from them.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::patterns::WHITESPACE_NORMALIZE;

use super::tags::is_framed_tag;

/// Text contributed by a single element: its own text plus its tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    content: String,
    visit_order: usize,
    tag: String,
    #[serde(skip)]
    token_count: usize,
}

impl TextNode {
    /// Build a node from an element's text and tail.
    ///
    /// A leaf's text runs straight into its tail in the source, so the two are
    /// concatenated as-is. When the element has children their text sits in
    /// between, so text and tail are kept apart by a space.
    ///
    /// Returns `None` when the result holds no tokens.
    #[must_use]
    pub fn from_parts(
        tag: &str,
        text: &str,
        tail: &str,
        has_children: bool,
        visit_order: usize,
    ) -> Option<Self> {
        let raw = if has_children {
            format!("{text} {tail}")
        } else {
            format!("{text}{tail}")
        };
        let node = Self::new(&raw, visit_order, tag);
        (node.token_count > 0).then_some(node)
    }

    /// Build a node from raw content, normalizing whitespace.
    #[must_use]
    pub fn new(content: &str, visit_order: usize, tag: &str) -> Self {
        let content = WHITESPACE_NORMALIZE.replace_all(content, " ").trim().to_string();
        let token_count = content.split_whitespace().count();
        Self {
            content,
            visit_order,
            tag: tag.to_ascii_lowercase(),
            token_count,
        }
    }

    /// Normalized text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Traversal time at which the element was first dequeued.
    #[must_use]
    pub fn visit_order(&self) -> usize {
        self.visit_order
    }

    /// Tag of the contributing element.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whitespace-separated tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.content.split_whitespace()
    }

    /// Number of tokens.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Content with newline framing for block-level tags.
    #[must_use]
    pub fn formatted_content(&self) -> String {
        if is_framed_tag(&self.tag) {
            format!("\n{}\n", self.content)
        } else {
            self.content.clone()
        }
    }
}

/// Non-empty run of text nodes that are contiguous in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSequence {
    members: Vec<TextNode>,
    entry_order: usize,
    exit_order: usize,
    word_count: usize,
}

impl NodeSequence {
    /// Sequence holding a single node.
    #[must_use]
    pub fn singleton(node: TextNode) -> Self {
        Self {
            entry_order: node.visit_order,
            exit_order: node.visit_order,
            word_count: node.token_count,
            members: vec![node],
        }
    }

    /// Append `other` after this sequence's members.
    #[must_use]
    pub fn merged(mut self, other: NodeSequence) -> Self {
        self.entry_order = self.entry_order.min(other.entry_order);
        self.exit_order = self.exit_order.max(other.exit_order);
        self.word_count += other.word_count;
        self.members.extend(other.members);
        self
    }

    /// Member nodes in traversal order.
    #[must_use]
    pub fn members(&self) -> &[TextNode] {
        &self.members
    }

    /// Number of member nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; sequences hold at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Smallest member visit order.
    #[must_use]
    pub fn entry_order(&self) -> usize {
        self.entry_order
    }

    /// Largest member visit order.
    #[must_use]
    pub fn exit_order(&self) -> usize {
        self.exit_order
    }

    /// Total tokens over all members.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// All member tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.members.iter().flat_map(|member| member.tokens())
    }

    /// Distinct member tags.
    #[must_use]
    pub fn tags(&self) -> BTreeSet<&str> {
        self.members.iter().map(TextNode::tag).collect()
    }

    /// Member contents joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.members
            .iter()
            .map(TextNode::content)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Member contents with block framing preserved.
    #[must_use]
    pub fn formatted_text(&self) -> String {
        let mut out = String::new();
        for member in &self.members {
            let piece = member.formatted_content();
            if !out.is_empty() && !out.ends_with('\n') && !piece.starts_with('\n') {
                out.push(' ');
            }
            out.push_str(&piece);
        }
        out
    }
}
