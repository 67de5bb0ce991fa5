use adjgraph::{Error, Graph, GraphOptions};

#[test]
fn add_edge_is_one_way() {
    let mut g: Graph<(), ()> = Graph::directed();
    g.add_edge("x", "y");

    assert_eq!(g.neighbors("x"), Ok(vec!["y"]));
    assert_eq!(g.neighbors("y"), Ok(vec![]));
    assert_eq!(g.adjacent("x", "y"), Ok(true));
    assert_eq!(g.adjacent("y", "x"), Ok(false));

    g.add_edge("y", "x");
    assert_eq!(g.neighbors("y"), Ok(vec!["x"]));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn default_graph_is_directed() {
    let g: Graph<(), ()> = Graph::default();
    assert!(g.is_directed());
    assert_eq!(g.options(), GraphOptions::default());
}

#[test]
fn missing_targets_stay_dangling_when_not_created() {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions {
        create_missing_targets: false,
        ..Default::default()
    });
    g.add_edge("a", "b");

    assert!(g.has_vertex("a"));
    assert!(!g.has_vertex("b"));
    assert_eq!(g.neighbors("a"), Ok(vec!["b"]));
    assert_eq!(
        g.neighbors("b"),
        Err(Error::VertexNotFound { id: "b".to_string() })
    );
    assert_eq!(g.vertex_count(), 1);
}

#[test]
fn undirected_graphs_ignore_create_missing_targets() {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions {
        directed: false,
        create_missing_targets: false,
    });
    g.add_edge("a", "b");
    assert_eq!(g.neighbors("b"), Ok(vec!["a"]));
}

#[test]
fn remove_edge_only_touches_the_source_list() {
    let mut g: Graph<(), i32> = Graph::directed();
    g.add_edge_with_value("a", "b", 1);
    g.add_edge_with_value("b", "a", 2);

    assert_eq!(g.remove_edge("a", "b"), Ok(1));
    assert_eq!(g.adjacent("a", "b"), Ok(false));
    assert_eq!(g.edge_value("b", "a"), Ok(&2));
}

#[test]
fn remove_edge_reports_missing_vertex_before_missing_edge() {
    let mut g: Graph<(), ()> = Graph::directed();
    g.add_edge("a", "b");

    assert_eq!(
        g.remove_edge("c", "a"),
        Err(Error::VertexNotFound { id: "c".to_string() })
    );
    assert_eq!(
        g.remove_edge("b", "a"),
        Err(Error::EdgeNotFound {
            from: "b".to_string(),
            to: "a".to_string()
        })
    );
}

#[test]
fn remove_vertex_drops_outgoing_edges_and_leaves_incoming_dangling() {
    let mut g: Graph<(), ()> = Graph::directed();
    g.add_edge("a", "b");
    g.add_edge("b", "c");
    g.add_edge("c", "b");

    g.remove_vertex("b").unwrap();

    assert!(!g.has_vertex("b"));
    assert_eq!(g.neighbors("a"), Ok(vec!["b"]));
    assert_eq!(g.neighbors("c"), Ok(vec!["b"]));
    assert_eq!(g.edge_count(), 2);

    // Re-adding the id reattaches the dangling records.
    assert!(g.add_vertex("b"));
    assert_eq!(g.neighbors("b"), Ok(vec![]));
}

#[test]
fn edge_value_round_trip_uses_the_first_parallel_record() {
    let mut g: Graph<(), &str> = Graph::directed();
    g.add_edge("a", "b");
    g.add_edge("a", "b");

    assert_eq!(g.set_edge_value("a", "b", "first"), Ok(""));
    assert_eq!(g.edge_value("a", "b"), Ok(&"first"));

    let values: Vec<&str> = g.edges("a").unwrap().map(|(_, v)| *v).collect();
    assert_eq!(values, vec!["first", ""]);
}

#[test]
fn edge_value_mut_updates_in_place() {
    let mut g: Graph<(), Vec<u32>> = Graph::directed();
    g.add_edge("a", "b");
    g.edge_value_mut("a", "b").unwrap().push(3);
    assert_eq!(g.edge_value("a", "b"), Ok(&vec![3]));
}

#[test]
fn clear_removes_everything() {
    let mut g: Graph<(), ()> = Graph::directed();
    g.add_edge("a", "b");
    g.clear();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}
