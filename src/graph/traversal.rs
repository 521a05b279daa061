//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use crate::types::{Color, GraphError, GraphNode, GraphResult, Label, NodeState};

use super::base::require_node;
use super::{BfsTree, Graph};

/// Hook invoked by [`BfsVisitor`] when a node becomes `Finished`.
///
/// This is the only customization point of the traversal.
pub trait NodeVisitor<L> {
    /// Called once per reachable node, after all its outgoing edges have
    /// been examined. Nodes arrive in non-decreasing `distance` order.
    fn on_finish(&mut self, _node: &GraphNode<L>, _distance: usize) {}
}

/// Visitor that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl<L> NodeVisitor<L> for NoopVisitor {}

impl<L, F> NodeVisitor<L> for F
where
    F: FnMut(&GraphNode<L>, usize),
{
    fn on_finish(&mut self, node: &GraphNode<L>, distance: usize) {
        self(node, distance)
    }
}

/// Breadth-first traversal over any [`Graph`].
///
/// The engine keeps no traversal state of its own: every call to
/// [`traverse`](Self::traverse) allocates fresh per-node records and returns
/// them in a [`BfsTree`], so repeated runs never see each other's state and
/// several traversals may share the same `&graph`.
#[derive(Debug, Clone, Default)]
pub struct BfsVisitor<V = NoopVisitor> {
    visitor: V,
}

impl BfsVisitor<NoopVisitor> {
    /// Create a traversal with no visitation hook.
    pub fn new() -> Self {
        Self {
            visitor: NoopVisitor,
        }
    }
}

impl<V> BfsVisitor<V> {
    /// Create a traversal that calls `visitor` on every finished node.
    pub fn with_visitor(visitor: V) -> Self {
        Self { visitor }
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    /// Consume the traversal, returning the hook.
    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Run BFS over `graph` from `source`.
    ///
    /// Every node of the graph starts `Unvisited`. Reachable nodes end
    /// `Finished` with their minimum hop count from `source` and a
    /// predecessor on one shortest path. Fails with
    /// [`GraphError::NodeNotFound`] if `source` is not in `graph`, or if an
    /// edge leads to a node the graph does not list.
    pub fn traverse<L, G>(&mut self, graph: &G, source: &GraphNode<L>) -> GraphResult<BfsTree<L>>
    where
        L: Label,
        G: Graph<L>,
        V: NodeVisitor<L>,
    {
        require_node(graph, source)?;

        let mut states: HashMap<GraphNode<L>, NodeState<L>> =
            HashMap::with_capacity(graph.node_count());
        for node in graph.nodes() {
            states.insert(node.clone(), NodeState::unvisited());
        }

        let mut finish_order: Vec<GraphNode<L>> = Vec::new();
        let mut queue: VecDeque<(GraphNode<L>, usize)> = VecDeque::new();

        let state = state_of(&mut states, source)?;
        state.color = Color::Discovered;
        state.distance = Some(0);
        queue.push_back((source.clone(), 0));
        log::debug!(
            "BFS from {:?} over {} nodes",
            source.label(),
            graph.node_count()
        );

        while let Some((current, depth)) = queue.pop_front() {
            for edge in graph.edges_of(&current)? {
                let next = edge.opposite(&current);
                let state = state_of(&mut states, next)?;
                if state.color == Color::Unvisited {
                    state.color = Color::Discovered;
                    state.distance = Some(depth + 1);
                    state.predecessor = Some(current.clone());
                    queue.push_back((next.clone(), depth + 1));
                }
            }

            state_of(&mut states, &current)?.color = Color::Finished;
            log::trace!("Finished {:?} at distance {}", current.label(), depth);
            self.visitor.on_finish(&current, depth);
            finish_order.push(current);
        }

        log::debug!(
            "BFS from {:?} reached {} of {} nodes",
            source.label(),
            finish_order.len(),
            states.len()
        );
        Ok(BfsTree::new(source.clone(), states, finish_order))
    }
}

/// State record of `node`. Missing only when the graph lists an edge to a
/// node it does not report in [`Graph::nodes`].
fn state_of<'s, L: Label>(
    states: &'s mut HashMap<GraphNode<L>, NodeState<L>>,
    node: &GraphNode<L>,
) -> GraphResult<&'s mut NodeState<L>> {
    states
        .get_mut(node)
        .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node.label())))
}
