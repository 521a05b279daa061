//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node required by the operation is not in the graph.
    #[error("Node {0} not found in graph")]
    NodeNotFound(String),

    /// An edge endpoint is not a node of the graph.
    #[error("Edge {tail} -> {head} references a node that is not in the graph")]
    MissingEndpoint { tail: String, head: String },

    /// Edge directedness does not agree with the graph.
    #[error("Edge directedness mismatch: graph directed = {graph_directed}, edge directed = {edge_directed}")]
    DirectednessMismatch {
        graph_directed: bool,
        edge_directed: bool,
    },

    /// The operation is not supported by this graph representation.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

impl GraphError {
    /// The argument was well formed but violates a graph precondition.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NodeNotFound(_) | Self::MissingEndpoint { .. } | Self::DirectednessMismatch { .. }
        )
    }

    /// The operation is permanently unsupported by the representation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
