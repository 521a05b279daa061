//! Graph edges.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::GraphNode;

/// An edge between two nodes, optionally weighted.
///
/// Equality and hashing look only at the endpoints and the directed flag:
/// directed edges compare the ordered pair (tail, head), undirected edges the
/// unordered pair. The weight never takes part, so two edges over the same
/// endpoints with different weights are the same edge.
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge<L> {
    tail: GraphNode<L>,
    head: GraphNode<L>,
    weight: Option<f64>,
    directed: bool,
}

impl<L> GraphEdge<L> {
    /// Create a directed, unweighted edge `tail -> head`.
    pub fn directed(tail: impl Into<GraphNode<L>>, head: impl Into<GraphNode<L>>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
            weight: None,
            directed: true,
        }
    }

    /// Create an undirected, unweighted edge between `a` and `b`.
    pub fn undirected(a: impl Into<GraphNode<L>>, b: impl Into<GraphNode<L>>) -> Self {
        Self {
            tail: a.into(),
            head: b.into(),
            weight: None,
            directed: false,
        }
    }

    /// Attach a weight to the edge.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Origin of the edge.
    pub fn tail(&self) -> &GraphNode<L> {
        &self.tail
    }

    /// Destination of the edge.
    pub fn head(&self) -> &GraphNode<L> {
        &self.head
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

impl<L: PartialEq> GraphEdge<L> {
    /// The endpoint reached by following this edge out of `node`.
    ///
    /// Directed edges always lead to the head. Undirected edges lead to
    /// whichever endpoint is not `node`.
    pub fn opposite(&self, node: &GraphNode<L>) -> &GraphNode<L> {
        if self.directed || self.tail == *node {
            &self.head
        } else {
            &self.tail
        }
    }
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        let same = self.tail == other.tail && self.head == other.head;
        if self.directed {
            same
        } else {
            same || (self.tail == other.head && self.head == other.tail)
        }
    }
}

impl<L: Eq> Eq for GraphEdge<L> {}

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.tail.hash(state);
            self.head.hash(state);
        } else {
            // Order-independent combination so (a, b) and (b, a) collide.
            state.write_u64(endpoint_hash(&self.tail) ^ endpoint_hash(&self.head));
        }
    }
}

fn endpoint_hash<L: Hash>(node: &GraphNode<L>) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

impl<L: fmt::Display> fmt::Display for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        match self.weight {
            Some(w) => write!(f, "{} {} {} ({})", self.tail, arrow, self.head, w),
            None => write!(f, "{} {} {}", self.tail, arrow, self.head),
        }
    }
}
