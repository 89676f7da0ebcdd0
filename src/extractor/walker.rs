//! Iterative depth-first walk over an element tree.
//!
//! The walk uses an explicit stack, so deeply nested or malformed documents
//! cannot exhaust the call stack. Every element with children is popped twice:
//! once on the way down (it is `Discovered` and emits its own text) and once
//! after all its descendants (it becomes `Processed`). Leaves are popped once.
//! The shared `time` counter advances on every pop, giving a time axis on
//! which sibling distance can later be measured.

use tracing::{debug, trace};

use crate::etree::Element;
use crate::{Error, Result};

use super::state::{TraversalState, TraversalTable};
use super::text::TextNode;

/// Output of one walk.
#[derive(Debug, Clone)]
pub struct Walk<Id> {
    /// Text nodes in emission order.
    pub nodes: Vec<TextNode>,
    /// Final traversal state and transition history.
    pub table: TraversalTable<Id>,
    /// Total number of pops.
    pub pops: usize,
}

/// Depth-first walker holding the state of a single walk.
pub struct TreeWalker<E: Element> {
    stack: Vec<E>,
    table: TraversalTable<E::Id>,
    time: usize,
}

impl<E: Element> TreeWalker<E> {
    /// Prepare a walk rooted at `root`.
    #[must_use]
    pub fn new(root: E) -> Self {
        Self {
            stack: vec![root],
            table: TraversalTable::new(),
            time: 0,
        }
    }

    /// Run the walk to completion.
    ///
    /// Fails with [`Error::InvariantViolation`] when an element is reached
    /// after it was already processed, which means the input is not a tree.
    pub fn walk(mut self) -> Result<Walk<E::Id>> {
        let mut nodes = Vec::new();

        while let Some(element) = self.stack.pop() {
            self.time += 1;
            let id = element.id();

            match self.table.state(id) {
                TraversalState::Discovered => self.table.finish(id, self.time),
                TraversalState::Processed => {
                    return Err(Error::InvariantViolation { order: self.time });
                }
                TraversalState::Unvisited => {
                    self.table.discover(id, self.time);
                    let children = element.children();

                    if let Some(node) = TextNode::from_parts(
                        &element.tag(),
                        &element.text(),
                        &element.tail(),
                        !children.is_empty(),
                        self.time,
                    ) {
                        trace!(order = self.time, tag = node.tag(), tokens = node.token_count(), "text node");
                        nodes.push(node);
                    }

                    if children.is_empty() {
                        self.table.finish(id, self.time);
                    } else {
                        self.stack.push(element);
                        self.stack.extend(children.into_iter().rev());
                    }
                }
            }
        }

        debug!(pops = self.time, nodes = nodes.len(), elements = self.table.len(), "walk finished");

        Ok(Walk {
            nodes,
            table: self.table,
            pops: self.time,
        })
    }
}

/// Walk the tree under `root` and return its text nodes in reading order.
pub fn walk<E: Element>(root: E) -> Result<Vec<TextNode>> {
    Ok(TreeWalker::new(root).walk()?.nodes)
}
