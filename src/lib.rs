//! adjgraph — a generic directed graph backed by hash-map adjacency lists,
//! with a breadth-first search that exposes a per-node visitation hook.
//!
//! Nodes are identified by label. Each node maps to the set of its outgoing
//! edges, giving pseudo-constant-time node and edge membership tests.
//! [`BfsVisitor`] computes shortest hop distances and a predecessor tree over
//! any [`Graph`], returning the annotations in a [`BfsTree`].

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    BfsTree, BfsVisitor, Graph, GraphBuilder, MapAdjacencyListGraph, NodeVisitor, NoopVisitor,
};
pub use types::{Color, GraphEdge, GraphError, GraphNode, GraphResult, Label, NodeState};
