//! Merging of traversal-adjacent sequences.
//!
//! Two sequences are adjacent when the exit order of the first and the entry
//! order of the second differ by exactly one. Wider gaps, and a gap of zero,
//! never merge. Because merging widens a sequence's entry/exit span, passes
//! are repeated until the number of sequences stops changing.

use tracing::debug;

use super::text::NodeSequence;

/// Whether `next` directly follows `prev` on the traversal time axis.
#[inline]
#[must_use]
pub fn is_adjacent(prev: &NodeSequence, next: &NodeSequence) -> bool {
    prev.exit_order().abs_diff(next.entry_order()) == 1
}

/// One left-to-right merge pass.
#[must_use]
pub fn merge_pass(sequences: Vec<NodeSequence>) -> Vec<NodeSequence> {
    let mut merged = Vec::with_capacity(sequences.len());
    let mut current: Option<NodeSequence> = None;

    for next in sequences {
        current = Some(match current.take() {
            Some(prev) if is_adjacent(&prev, &next) => prev.merged(next),
            Some(prev) => {
                merged.push(prev);
                next
            }
            None => next,
        });
    }

    merged.extend(current);
    merged
}

/// Merge adjacent sequences until a fixed point is reached.
#[must_use]
pub fn merge_sequences(mut sequences: Vec<NodeSequence>) -> Vec<NodeSequence> {
    let mut passes = 0;
    loop {
        let before = sequences.len();
        sequences = merge_pass(sequences);
        passes += 1;
        if sequences.len() == before {
            break;
        }
    }

    debug!(passes, sequences = sequences.len(), "merge finished");
    sequences
}
