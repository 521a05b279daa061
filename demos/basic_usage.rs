//! Basic build -> traverse -> inspect flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    // Build a small route map
    let mut builder = GraphBuilder::new();
    builder
        .nodes(["depot", "north", "south", "harbour", "airport"])
        .weighted_edge("depot", "north", 4.0)
        .weighted_edge("depot", "south", 2.5)
        .weighted_edge("north", "harbour", 3.0)
        .weighted_edge("south", "harbour", 6.0);
    let graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Traverse, printing nodes as they finish
    let mut bfs = BfsVisitor::with_visitor(|node: &GraphNode<&str>, distance: usize| {
        println!("  finished {:<8} at {} hop(s)", node.label(), distance);
    });
    let tree = bfs.traverse(&graph, &GraphNode::new("depot"))?;

    for label in ["harbour", "airport"] {
        let node = GraphNode::new(label);
        match tree.path_to(&node) {
            Some(path) => {
                let hops: Vec<String> = path.iter().map(|n| n.to_string()).collect();
                println!("{}: {}", label, hops.join(" -> "));
            }
            None => {
                let color = tree.color(&node).unwrap_or(Color::Unvisited);
                println!("{}: unreachable ({})", label, color);
            }
        }
    }

    Ok(())
}
