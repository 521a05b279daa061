//! The abstract graph interface shared by every representation.

use std::collections::HashSet;

use crate::types::{GraphEdge, GraphError, GraphNode, GraphResult, Label};

/// Operations every graph representation exposes.
///
/// Nodes are identified by label. Representations may refuse whole groups of
/// operations (removal, index-based access) by returning
/// [`GraphError::Unsupported`]; callers must not treat that as "not found".
pub trait Graph<L: Label> {
    /// Whether edges of this graph are directed.
    fn is_directed(&self) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Remove every node and edge.
    fn clear(&mut self);

    /// Borrowed view of the node set.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a GraphNode<L>>
    where
        L: 'a;

    /// Add a node. Returns `false` without changes if the label is already present.
    fn add_node(&mut self, node: GraphNode<L>) -> bool;

    fn remove_node(&mut self, node: &GraphNode<L>) -> GraphResult<bool>;

    /// Whether a node with this label is in the graph.
    fn contains_node(&self, node: &GraphNode<L>) -> bool;

    /// Look up the stored node carrying `label`.
    fn node_of(&self, label: &L) -> Option<&GraphNode<L>>;

    fn node_index_of(&self, label: &L) -> GraphResult<usize>;

    fn node_at_index(&self, index: usize) -> GraphResult<&GraphNode<L>>;

    fn edges_between(&self, index1: usize, index2: usize) -> GraphResult<Vec<&GraphEdge<L>>>;

    /// Add an edge between two existing nodes.
    ///
    /// Returns `Ok(false)` without changes if an equal edge is already present.
    fn add_edge(&mut self, edge: GraphEdge<L>) -> GraphResult<bool>;

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> GraphResult<bool>;

    /// Whether an equal edge is in the graph. Both endpoints must be nodes.
    fn contains_edge(&self, edge: &GraphEdge<L>) -> GraphResult<bool>;

    /// Edges leaving `node`.
    fn edges_of<'a>(
        &'a self,
        node: &GraphNode<L>,
    ) -> GraphResult<impl Iterator<Item = &'a GraphEdge<L>>>
    where
        L: 'a;

    /// Every edge of the graph.
    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a GraphEdge<L>>
    where
        L: 'a,
    {
        self.nodes().flat_map(move |node| {
            let edges = self.edges_of(node);
            debug_assert!(edges.is_ok(), "listed node {:?} has no edge set", node.label());
            edges.into_iter().flatten()
        })
    }

    /// Edges whose head is `node`. Scans the whole graph: O(V + E).
    fn ingoing_edges_of(&self, node: &GraphNode<L>) -> GraphResult<HashSet<&GraphEdge<L>>> {
        if !self.is_directed() {
            return Err(GraphError::Unsupported("ingoing edges of an undirected graph"));
        }
        require_node(self, node)?;
        Ok(self.edges().filter(|edge| edge.head() == node).collect())
    }

    /// Nodes one outgoing edge away from `node`.
    fn adjacent_nodes_of(&self, node: &GraphNode<L>) -> GraphResult<HashSet<&GraphNode<L>>> {
        require_node(self, node)?;
        Ok(self.edges_of(node)?.map(|edge| edge.opposite(node)).collect())
    }

    /// Nodes with an edge into `node`. Scans the whole graph: O(V + E).
    fn predecessor_nodes_of(&self, node: &GraphNode<L>) -> GraphResult<HashSet<&GraphNode<L>>> {
        if !self.is_directed() {
            return Err(GraphError::Unsupported("predecessors of an undirected graph"));
        }
        require_node(self, node)?;
        Ok(self
            .edges()
            .filter(|edge| edge.head() == node)
            .map(|edge| edge.tail())
            .collect())
    }
}

/// Fail with [`GraphError::NodeNotFound`] unless `node` is in `graph`.
pub(crate) fn require_node<L, G>(graph: &G, node: &GraphNode<L>) -> GraphResult<()>
where
    L: Label,
    G: Graph<L> + ?Sized,
{
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(format!("{:?}", node.label())))
    }
}
