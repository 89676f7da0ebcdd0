//! Content extraction pipeline.
//!
//! Wires the walker, the merger and the classifier together over a
//! caller-chosen root element:
//!
//! root → walk → singleton sequences → merge to fixed point → classify

use tracing::debug;

use crate::etree::Element;
use crate::patterns::{LINE_WHITESPACE, MULTIPLE_NEWLINES};
use crate::{Options, Result};

use super::classifier::ContentClassifier;
use super::merger::merge_sequences;
use super::text::NodeSequence;
use super::walker::TreeWalker;

/// Extract the content sequences under `root`.
///
/// Returns an empty list when nothing qualifies. Fails only when the input
/// is not a tree.
pub fn extract_sequences<E: Element>(root: E, options: &Options) -> Result<Vec<NodeSequence>> {
    let walk = TreeWalker::new(root).walk()?;
    let emitted = walk.nodes.len();

    let singletons: Vec<NodeSequence> = walk.nodes.into_iter().map(NodeSequence::singleton).collect();
    let merged = merge_sequences(singletons);
    let candidates = merged.len();

    let content = ContentClassifier::new(options).classify(merged);

    debug!(
        pops = walk.pops,
        text_nodes = emitted,
        sequences = candidates,
        retained = content.len(),
        "extraction finished"
    );

    Ok(content)
}

/// Render extracted sequences as plain text, one block per sequence.
///
/// Block-level members keep their own lines; blocks are separated by a blank
/// line.
#[must_use]
pub fn join_text(sequences: &[NodeSequence]) -> String {
    let joined = sequences
        .iter()
        .map(|seq| seq.formatted_text().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n");

    let joined = LINE_WHITESPACE.replace_all(&joined, "");
    MULTIPLE_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}
