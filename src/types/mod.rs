//! All data types for the adjgraph library.

pub mod edge;
pub mod error;
pub mod node;

use std::fmt::Debug;
use std::hash::Hash;

pub use edge::GraphEdge;
pub use error::{GraphError, GraphResult};
pub use node::{Color, GraphNode, NodeState};

/// Bound for node labels: hashable identity that can be cloned and printed.
pub trait Label: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Label for T {}
