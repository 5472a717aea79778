//! Errors reported by the checked (`try_*`) mutation methods.
//!
//! The plain mutation methods never fail: an invalid request is a silent no-op.
//! The checked variants perform exactly the same mutation but tell the caller
//! *why* nothing happened.

use thiserror::Error;

/// Why a checked graph mutation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An integer vertex id lies outside `0..count`.
    #[error("vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange {
        /// The offending id.
        vertex: usize,
        /// Number of vertices in the graph at the time of the call.
        count: usize,
    },

    /// A labelled vertex is not present in the graph.
    #[error("vertex is not present in the graph")]
    UnknownVertex,

    /// Both endpoints of the requested edge are the same vertex.
    #[error("self-loops are not allowed")]
    SelfLoop,

    /// The requested edge weight is below zero.
    #[error("edge weights must not be negative")]
    NegativeWeight,

    /// The edge is already present.
    #[error("edge already exists")]
    DuplicateEdge,

    /// The edge to remove is not present.
    #[error("edge does not exist")]
    MissingEdge,
}

/// Result alias for checked graph mutations.
pub type Result<T> = core::result::Result<T, GraphError>;
