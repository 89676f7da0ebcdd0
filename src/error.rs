//! Error types for textsift.
//!
//! Extraction is a pure transform, so the only runtime failure is a malformed
//! input tree. An empty result is not an error.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element was dequeued after it had already been fully processed.
    ///
    /// This only happens when the input is not a tree (a node reachable
    /// through two parents, or a cycle). The walk is aborted.
    #[error("Traversal invariant violated: element popped at order {order} was already processed")]
    InvariantViolation {
        /// Traversal time at which the offending pop happened.
        order: usize,
    },

    /// Options could not be loaded.
    #[error("Invalid options: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
