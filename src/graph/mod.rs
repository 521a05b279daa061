//! In-memory graph operations: the graph interface, its hash-map
//! adjacency-list implementation and breadth-first traversal.

pub mod base;
pub mod bfs_tree;
pub mod builder;
pub mod map_graph;
pub mod traversal;

pub use base::Graph;
pub use bfs_tree::BfsTree;
pub use builder::GraphBuilder;
pub use map_graph::MapAdjacencyListGraph;
pub use traversal::{BfsVisitor, NodeVisitor, NoopVisitor};
