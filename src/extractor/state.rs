//! Traversal state tracking.
//!
//! State is kept in a per-walk side table keyed by element identity, so the
//! input tree is never mutated and two walks over the same tree never share
//! state.

use std::collections::HashMap;
use std::hash::Hash;

/// Per-element marker used by the tree walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalState {
    /// Not yet dequeued.
    #[default]
    Unvisited,
    /// Dequeued once; descendants are still on the stack.
    Discovered,
    /// The element and all of its descendants have been handled.
    Processed,
}

/// One recorded state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<Id> {
    /// Traversal time of the pop that caused the change.
    pub time: usize,
    /// Element whose state changed.
    pub id: Id,
    /// State entered.
    pub state: TraversalState,
}

/// Side table mapping element identity to traversal state.
///
/// Also keeps the ordered history of transitions so a walk can be audited
/// after the fact.
#[derive(Debug, Clone)]
pub struct TraversalTable<Id> {
    states: HashMap<Id, TraversalState>,
    history: Vec<Transition<Id>>,
}

impl<Id: Copy + Eq + Hash> TraversalTable<Id> {
    /// Create an empty table; every element starts `Unvisited`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Current state of an element.
    #[must_use]
    pub fn state(&self, id: Id) -> TraversalState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Mark an element `Discovered` at `time`.
    pub fn discover(&mut self, id: Id, time: usize) {
        self.set(id, TraversalState::Discovered, time);
    }

    /// Mark an element `Processed` at `time`.
    pub fn finish(&mut self, id: Id, time: usize) {
        self.set(id, TraversalState::Processed, time);
    }

    fn set(&mut self, id: Id, state: TraversalState, time: usize) {
        self.states.insert(id, state);
        self.history.push(Transition { time, id, state });
    }

    /// Recorded transitions in the order they happened.
    #[must_use]
    pub fn history(&self) -> &[Transition<Id>] {
        &self.history
    }

    /// Number of elements that have left `Unvisited`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no element has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether every seen element is `Processed`.
    #[must_use]
    pub fn all_processed(&self) -> bool {
        self.states
            .values()
            .all(|state| *state == TraversalState::Processed)
    }
}

impl<Id: Copy + Eq + Hash> Default for TraversalTable<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_are_unvisited() {
        let table: TraversalTable<u32> = TraversalTable::new();
        assert_eq!(table.state(7), TraversalState::Unvisited);
        assert!(table.is_empty());
    }

    #[test]
    fn test_discover_then_finish() {
        let mut table = TraversalTable::new();

        table.discover(1_u32, 1);
        assert_eq!(table.state(1), TraversalState::Discovered);
        assert!(!table.all_processed());

        table.finish(1, 4);
        assert_eq!(table.state(1), TraversalState::Processed);
        assert!(table.all_processed());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_history_keeps_order() {
        let mut table = TraversalTable::new();
        table.discover('a', 1);
        table.discover('b', 2);
        table.finish('b', 2);
        table.finish('a', 3);

        let states: Vec<_> = table.history().iter().map(|t| (t.id, t.state)).collect();
        assert_eq!(
            states,
            vec![
                ('a', TraversalState::Discovered),
                ('b', TraversalState::Discovered),
                ('b', TraversalState::Processed),
                ('a', TraversalState::Processed),
            ]
        );
    }

    #[test]
    fn test_tables_are_independent() {
        let mut first = TraversalTable::new();
        let second: TraversalTable<u8> = TraversalTable::new();

        first.discover(3_u8, 1);
        assert_eq!(first.state(3), TraversalState::Discovered);
        assert_eq!(second.state(3), TraversalState::Unvisited);
    }
}
