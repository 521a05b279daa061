//! Fluent API for building MapAdjacencyListGraph instances.

use crate::types::{GraphEdge, GraphNode, GraphResult, Label};

use super::{Graph, MapAdjacencyListGraph};

/// Fluent builder for constructing a [`MapAdjacencyListGraph`].
///
/// Nodes are inserted before any edge, so edge order relative to node order
/// does not matter. Edges are validated by [`Graph::add_edge`] at build time.
pub struct GraphBuilder<L> {
    capacity: usize,
    nodes: Vec<L>,
    edges: Vec<GraphEdge<L>>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Reserve room for `capacity` nodes in the built graph.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            nodes: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, label: L) -> &mut Self {
        self.nodes.push(label);
        self
    }

    /// Add several nodes.
    pub fn nodes<I: IntoIterator<Item = L>>(&mut self, labels: I) -> &mut Self {
        self.nodes.extend(labels);
        self
    }

    /// Add a directed edge `tail -> head`.
    pub fn edge(&mut self, tail: L, head: L) -> &mut Self {
        self.edges.push(GraphEdge::directed(tail, head));
        self
    }

    /// Add a weighted directed edge `tail -> head`.
    pub fn weighted_edge(&mut self, tail: L, head: L, weight: f64) -> &mut Self {
        self.edges
            .push(GraphEdge::directed(tail, head).with_weight(weight));
        self
    }

    /// Build the final graph. Fails on the first edge the graph rejects.
    pub fn build(self) -> GraphResult<MapAdjacencyListGraph<L>> {
        let mut graph = MapAdjacencyListGraph::with_capacity(self.capacity.max(self.nodes.len()));
        for label in self.nodes {
            graph.add_node(GraphNode::new(label));
        }
        for edge in self.edges {
            graph.add_edge(edge)?;
        }
        log::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
