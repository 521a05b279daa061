//! Graph nodes and per-traversal node state.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Visitation state of a node during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    /// Not yet reached from the source.
    Unvisited = 0,
    /// Reached and waiting in the frontier.
    Discovered = 1,
    /// Dequeued and all outgoing edges examined.
    Finished = 2,
}

impl Color {
    /// Return a human-readable name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unvisited => "unvisited",
            Self::Discovered => "discovered",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A graph node. Identity is the label and nothing else.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode<L> {
    label: L,
}

impl<L> GraphNode<L> {
    /// Create a node with the given label.
    pub fn new(label: L) -> Self {
        Self { label }
    }

    /// The node label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consume the node, returning its label.
    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L: PartialEq> PartialEq for GraphNode<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<L: Eq> Eq for GraphNode<L> {}

impl<L: Hash> Hash for GraphNode<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

// Lets label-keyed maps be queried with a bare `&L`.
impl<L> Borrow<L> for GraphNode<L> {
    fn borrow(&self) -> &L {
        &self.label
    }
}

impl<L> From<L> for GraphNode<L> {
    fn from(label: L) -> Self {
        Self::new(label)
    }
}

impl<L: fmt::Display> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Traversal annotations recorded for a single node during one BFS run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeState<L> {
    /// Visitation state.
    pub color: Color,
    /// Hop count from the source; `None` until discovered.
    pub distance: Option<usize>,
    /// Parent in the traversal tree; `None` for the source and undiscovered nodes.
    pub predecessor: Option<GraphNode<L>>,
}

impl<L> NodeState<L> {
    /// A fresh, unvisited state.
    pub fn unvisited() -> Self {
        Self {
            color: Color::Unvisited,
            distance: None,
            predecessor: None,
        }
    }
}

impl<L> Default for NodeState<L> {
    fn default() -> Self {
        Self::unvisited()
    }
}
