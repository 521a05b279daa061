//! Phase 3 tests: Builder + traversal end-to-end, serialization of annotations.

use adjgraph::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_produces_graph() {
    init_logger();
    let mut builder = GraphBuilder::with_capacity(4);
    builder
        .node("kitchen")
        .node("hall")
        .node("garden")
        .node("hall")
        .edge("kitchen", "hall")
        .weighted_edge("hall", "garden", 2.5)
        .edge("kitchen", "hall");
    let graph = builder.build().unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let edge = graph
        .edges_of(&GraphNode::new("hall"))
        .unwrap()
        .next()
        .cloned()
        .unwrap();
    assert_eq!(edge.head().label(), &"garden");
    assert_eq!(edge.weight(), Some(2.5));
}

#[test]
fn test_builder_rejects_dangling_edge() {
    let mut builder = GraphBuilder::new();
    builder.nodes(["a", "b"]).edge("a", "b").edge("b", "c");
    let err = builder.build().unwrap_err();
    match err {
        GraphError::MissingEndpoint { ref head, .. } => assert_eq!(head, "\"c\""),
        e => panic!("Expected MissingEndpoint error, got {:?}", e),
    }
}

#[test]
fn test_builder_edges_before_nodes() {
    let mut builder = GraphBuilder::default();
    builder.edge(2, 1).node(1).node(2);
    let graph = builder.build().unwrap();
    assert!(graph
        .contains_edge(&GraphEdge::directed(2, 1))
        .unwrap());
}

// ==================== End-to-end Traversal Tests ====================

#[test]
fn test_traversal_over_string_labels() {
    init_logger();
    let mut graph: MapAdjacencyListGraph<String> = MapAdjacencyListGraph::new();
    for name in ["root", "left", "right", "leaf"] {
        graph.add_node(GraphNode::new(name.to_string()));
    }
    for (tail, head) in [("root", "left"), ("root", "right"), ("left", "leaf"), ("right", "leaf")] {
        graph
            .add_edge(GraphEdge::directed(tail.to_string(), head.to_string()))
            .unwrap();
    }

    let root = graph.node_of(&"root".to_string()).cloned().unwrap();
    let tree = BfsVisitor::new().traverse(&graph, &root).unwrap();

    let leaf = GraphNode::new("leaf".to_string());
    assert_eq!(tree.distance(&leaf), Some(2));

    // Either parent is a valid shortest-path predecessor.
    let parent = tree.predecessor(&leaf).unwrap();
    assert!(parent.label() == "left" || parent.label() == "right");
    assert_eq!(tree.path_to(&leaf).unwrap().len(), 3);
}

#[test]
fn test_labels_borrowing_local_strings() {
    let names: Vec<String> = ["north", "south", "east", "west"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut graph: MapAdjacencyListGraph<&str> = MapAdjacencyListGraph::new();
    for name in &names {
        graph.add_node(GraphNode::new(name.as_str()));
    }
    graph
        .add_edge(GraphEdge::directed(names[0].as_str(), names[1].as_str()))
        .unwrap();
    graph
        .add_edge(GraphEdge::directed(names[1].as_str(), names[2].as_str()))
        .unwrap();

    assert_eq!(graph.nodes().count(), 4);
    assert_eq!(graph.edges().count(), 2);
    assert_eq!(
        graph
            .edges_of(&GraphNode::new(names[1].as_str()))
            .unwrap()
            .count(),
        1
    );

    let tree = BfsVisitor::new()
        .traverse(&graph, &GraphNode::new(names[0].as_str()))
        .unwrap();
    assert_eq!(tree.distance(&GraphNode::new("east")), Some(2));
    assert_eq!(tree.color(&GraphNode::new("west")), Some(Color::Unvisited));
}

#[test]
fn test_long_chain() {
    let mut graph = MapAdjacencyListGraph::with_capacity(1_000);
    for i in 0..1_000u32 {
        graph.add_node(GraphNode::new(i));
    }
    for i in 0..999u32 {
        graph.add_edge(GraphEdge::directed(i, i + 1)).unwrap();
    }

    let tree = BfsVisitor::new()
        .traverse(&graph, &GraphNode::new(0))
        .unwrap();
    assert_eq!(tree.distance(&GraphNode::new(999)), Some(999));
    assert_eq!(tree.path_to(&GraphNode::new(999)).unwrap().len(), 1_000);

    let tree = BfsVisitor::new()
        .traverse(&graph, &GraphNode::new(500))
        .unwrap();
    assert_eq!(tree.reachable_count(), 500);
    assert_eq!(tree.color(&GraphNode::new(0)), Some(Color::Unvisited));
}

#[test]
fn test_concurrent_traversals_share_graph() {
    let mut builder = GraphBuilder::new();
    builder.nodes(0..50u32);
    for i in 0..49u32 {
        builder.edge(i, i + 1);
    }
    let graph = builder.build().unwrap();

    let results: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u32)
            .map(|start| {
                let graph = &graph;
                scope.spawn(move || {
                    BfsVisitor::new()
                        .traverse(graph, &GraphNode::new(start * 10))
                        .map(|tree| tree.reachable_count())
                        .unwrap_or(0)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(0))
            .collect()
    });

    assert_eq!(results, vec![50, 40, 30, 20]);
}

#[test]
fn test_clear_then_traverse_fails() {
    let mut builder = GraphBuilder::new();
    builder.nodes(['x', 'y']).edge('x', 'y');
    let mut graph = builder.build().unwrap();
    graph.clear();

    let err = BfsVisitor::new()
        .traverse(&graph, &GraphNode::new('x'))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

// ==================== Serialization Tests ====================

#[test]
fn test_node_state_serializes() {
    let mut builder = GraphBuilder::new();
    builder.nodes(["a", "b", "c"]).edge("a", "b");
    let graph = builder.build().unwrap();
    let tree = BfsVisitor::new()
        .traverse(&graph, &GraphNode::new("a"))
        .unwrap();

    let b = serde_json::to_value(tree.state(&GraphNode::new("b")).unwrap()).unwrap();
    assert_eq!(
        b,
        serde_json::json!({
            "color": "finished",
            "distance": 1,
            "predecessor": { "label": "a" },
        })
    );

    let c = serde_json::to_value(tree.state(&GraphNode::new("c")).unwrap()).unwrap();
    assert_eq!(c["color"], "unvisited");
    assert!(c["distance"].is_null());
    assert!(c["predecessor"].is_null());
}

#[test]
fn test_edge_serializes() {
    let edge: GraphEdge<&str> = GraphEdge::directed("a", "b").with_weight(0.5);
    let value = serde_json::to_value(&edge).unwrap();
    assert_eq!(value["tail"]["label"], "a");
    assert_eq!(value["head"]["label"], "b");
    assert_eq!(value["weight"], 0.5);
    assert_eq!(value["directed"], true);
    assert_eq!(edge.to_string(), "a -> b (0.5)");
    assert_eq!(Color::Discovered.to_string(), "discovered");
}
