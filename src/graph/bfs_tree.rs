//! Annotations produced by a breadth-first traversal.

use std::collections::HashMap;

use crate::types::{Color, GraphNode, Label, NodeState};

/// Result of one BFS run: a state record for every node of the graph.
///
/// Reachable nodes are `Finished` with a distance and, except for the source,
/// a predecessor. Unreachable nodes stay `Unvisited`.
#[derive(Debug, Clone)]
pub struct BfsTree<L> {
    source: GraphNode<L>,
    states: HashMap<GraphNode<L>, NodeState<L>>,
    finish_order: Vec<GraphNode<L>>,
}

impl<L: Label> BfsTree<L> {
    pub(crate) fn new(
        source: GraphNode<L>,
        states: HashMap<GraphNode<L>, NodeState<L>>,
        finish_order: Vec<GraphNode<L>>,
    ) -> Self {
        Self {
            source,
            states,
            finish_order,
        }
    }

    /// The node the traversal started from.
    pub fn source(&self) -> &GraphNode<L> {
        &self.source
    }

    /// Full state record of `node`, or `None` if it was not in the graph.
    pub fn state(&self, node: &GraphNode<L>) -> Option<&NodeState<L>> {
        self.states.get(node)
    }

    pub fn color(&self, node: &GraphNode<L>) -> Option<Color> {
        self.states.get(node).map(|s| s.color)
    }

    /// Hop count from the source; `None` if unreachable or unknown.
    pub fn distance(&self, node: &GraphNode<L>) -> Option<usize> {
        self.states.get(node).and_then(|s| s.distance)
    }

    /// Parent of `node` in the traversal tree.
    pub fn predecessor(&self, node: &GraphNode<L>) -> Option<&GraphNode<L>> {
        self.states.get(node).and_then(|s| s.predecessor.as_ref())
    }

    /// Whether `node` was reached from the source.
    pub fn is_reachable(&self, node: &GraphNode<L>) -> bool {
        self.distance(node).is_some()
    }

    /// A shortest path from the source to `node`, both ends included.
    ///
    /// Follows the predecessor chain back to the source. `None` if `node`
    /// was not reached.
    pub fn path_to(&self, node: &GraphNode<L>) -> Option<Vec<&GraphNode<L>>> {
        let (start, state) = self.states.get_key_value(node)?;
        let hops = state.distance?;

        let mut path = Vec::with_capacity(hops + 1);
        let mut current = start;
        path.push(current);
        while let Some(parent) = self.predecessor(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Nodes in the order they became `Finished`.
    pub fn finish_order(&self) -> &[GraphNode<L>] {
        &self.finish_order
    }

    /// Number of nodes reached from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.finish_order.len()
    }

    /// Number of nodes annotated (all nodes of the traversed graph).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over every node and its state.
    pub fn iter(&self) -> impl Iterator<Item = (&GraphNode<L>, &NodeState<L>)> {
        self.states.iter()
    }
}
