//! Error types for geocell operations.

use thiserror::Error;

/// Errors returned by geocell operations.
#[derive(Debug, Error)]
pub enum GeocellError {
    /// A caller-supplied argument was invalid (coordinates out of range,
    /// resolution outside `1..=13`, malformed cell code, mismatched
    /// resolutions, a non-positive result limit).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An error surfaced by the search backend while executing a cell query.
    /// Backend errors propagate unmodified; no retries are performed.
    #[error("search backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GeocellError {
    /// Wrap an arbitrary backend error for propagation out of a
    /// [`CellSearcher`](crate::store::CellSearcher) implementation.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        GeocellError::Backend(err.into())
    }
}

/// Result type for geocell operations.
pub type Result<T> = std::result::Result<T, GeocellError>;
