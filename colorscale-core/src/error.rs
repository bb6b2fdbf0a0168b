//! Error types for colorscale-core.

use thiserror::Error;

/// Result type alias for colorscale operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for colorscale operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Auto-level mode name not recognized.
    #[error("unsupported auto-level mode: {0:?}")]
    UnsupportedMode(String),

    /// Normalization name not recognized.
    #[error("unsupported normalization: {0:?}")]
    UnsupportedNormalization(String),

    /// Gradient name not present in the registry.
    #[error("unknown gradient: {0:?}")]
    UnknownGradient(String),

    /// Histogram edge and count sequences differ in length.
    #[error("histogram length mismatch: {edges} edges vs {counts} counts")]
    HistogramLengthMismatch {
        /// Number of bin edges supplied.
        edges: usize,
        /// Number of counts supplied.
        counts: usize,
    },

    /// Histogram edge is NaN or infinite.
    #[error("non-finite histogram edge at index {0}")]
    NonFiniteEdge(usize),

    /// Histogram edges are not strictly increasing.
    #[error("histogram edges not strictly increasing at index {0}")]
    UnorderedEdges(usize),
}
