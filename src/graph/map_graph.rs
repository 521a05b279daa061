//! Directed graph stored as hash-map adjacency lists.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphEdge, GraphError, GraphNode, GraphResult, Label};

use super::Graph;

/// A directed graph using a hashed variant of the adjacency-list representation.
///
/// Each node maps to the set of its outgoing edges, so the key set of the map
/// is the node set. Node and edge presence tests are pseudo-constant time
/// (one hash lookup each), at the price of more space than plain adjacency
/// lists. There is no reverse index: ingoing edges and predecessors cost a
/// full O(V + E) scan.
///
/// Removal and index-based lookup are not supported and always return
/// [`GraphError::Unsupported`]. Removing a node safely would require scanning
/// every adjacency set for dangling edges.
#[derive(Debug, Clone)]
pub struct MapAdjacencyListGraph<L> {
    /// Outgoing-edge set per node. Every node has an entry, possibly empty.
    adjacency: HashMap<GraphNode<L>, HashSet<GraphEdge<L>>>,
    /// Number of edges, maintained on insertion.
    edge_count: usize,
}

impl<L: Label> MapAdjacencyListGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Out-degree of `node`.
    pub fn out_degree(&self, node: &GraphNode<L>) -> GraphResult<usize> {
        self.outgoing(node).map(HashSet::len)
    }

    fn outgoing(&self, node: &GraphNode<L>) -> GraphResult<&HashSet<GraphEdge<L>>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node.label())))
    }

    /// Check endpoints and directedness of an edge against this graph.
    fn validate_edge(&self, edge: &GraphEdge<L>) -> GraphResult<()> {
        if !self.adjacency.contains_key(edge.tail()) || !self.adjacency.contains_key(edge.head()) {
            return Err(GraphError::MissingEndpoint {
                tail: format!("{:?}", edge.tail().label()),
                head: format!("{:?}", edge.head().label()),
            });
        }
        if edge.is_directed() != self.is_directed() {
            return Err(GraphError::DirectednessMismatch {
                graph_directed: self.is_directed(),
                edge_directed: edge.is_directed(),
            });
        }
        Ok(())
    }
}

impl<L: Label> Default for MapAdjacencyListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for MapAdjacencyListGraph<L> {
    fn is_directed(&self) -> bool {
        true
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn clear(&mut self) {
        log::debug!(
            "Clearing graph with {} nodes and {} edges",
            self.adjacency.len(),
            self.edge_count
        );
        self.adjacency.clear();
        self.edge_count = 0;
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a GraphNode<L>>
    where
        L: 'a,
    {
        self.adjacency.keys()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.adjacency.contains_key(&node) {
            log::debug!("Node {:?} already present", node.label());
            return false;
        }
        log::trace!("Adding node {:?}", node.label());
        self.adjacency.insert(node, HashSet::new());
        true
    }

    fn remove_node(&mut self, _node: &GraphNode<L>) -> GraphResult<bool> {
        log::warn!("remove_node called on a map adjacency-list graph");
        Err(GraphError::Unsupported("node removal"))
    }

    fn contains_node(&self, node: &GraphNode<L>) -> bool {
        self.adjacency.contains_key(node)
    }

    fn node_of(&self, label: &L) -> Option<&GraphNode<L>> {
        self.adjacency.get_key_value(label).map(|(node, _)| node)
    }

    fn node_index_of(&self, _label: &L) -> GraphResult<usize> {
        Err(GraphError::Unsupported("index-based node lookup"))
    }

    fn node_at_index(&self, _index: usize) -> GraphResult<&GraphNode<L>> {
        Err(GraphError::Unsupported("index-based node lookup"))
    }

    fn edges_between(&self, _index1: usize, _index2: usize) -> GraphResult<Vec<&GraphEdge<L>>> {
        Err(GraphError::Unsupported("index-based edge lookup"))
    }

    fn add_edge(&mut self, edge: GraphEdge<L>) -> GraphResult<bool> {
        self.validate_edge(&edge)?;

        let outgoing = self
            .adjacency
            .get_mut(edge.tail())
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", edge.tail().label())))?;
        if outgoing.contains(&edge) {
            log::debug!(
                "Edge {:?} -> {:?} already present",
                edge.tail().label(),
                edge.head().label()
            );
            return Ok(false);
        }

        log::trace!(
            "Adding edge {:?} -> {:?}",
            edge.tail().label(),
            edge.head().label()
        );
        outgoing.insert(edge);
        self.edge_count += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, _edge: &GraphEdge<L>) -> GraphResult<bool> {
        log::warn!("remove_edge called on a map adjacency-list graph");
        Err(GraphError::Unsupported("edge removal"))
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> GraphResult<bool> {
        self.validate_edge(edge)?;
        Ok(self.outgoing(edge.tail())?.contains(edge))
    }

    fn edges_of<'a>(
        &'a self,
        node: &GraphNode<L>,
    ) -> GraphResult<impl Iterator<Item = &'a GraphEdge<L>>>
    where
        L: 'a,
    {
        self.outgoing(node).map(|edges| edges.iter())
    }
}
