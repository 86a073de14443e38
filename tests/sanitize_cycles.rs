use linedag::dag::{PrecedenceGraph, build_raw_graph, sanitize};
use linedag::errors::LinedagError;
use linedag_test_utils::builders::{RawGraphBuilder, record};

#[test]
fn self_loops_are_removed() {
    linedag_test_utils::init_tracing();

    // A task whose own output feeds its own input.
    let records = vec![record("t", &["x"], &["x"])];

    let raw = build_raw_graph(records);
    assert_eq!(raw.edge_count(), 1, "raw graph keeps the self-loop");

    let clean = sanitize(raw);
    assert_eq!(clean.edge_count(), 0);
    assert!(clean.contains("t"), "the node itself survives");
}

#[test]
fn sanitize_is_idempotent() {
    let raw = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "a")
        .edge("d", "d")
        .edge("c", "e")
        .build_raw();

    let once = sanitize(raw);
    let twice = sanitize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn two_node_cycle_is_broken() {
    // a reads what b writes and vice versa.
    let records = vec![
        record("a", &["y"], &["x"]),
        record("b", &["x"], &["y"]),
    ];

    let clean = sanitize(build_raw_graph(records));
    assert!(clean.find_cycle().is_none());
    assert_eq!(clean.edge_count(), 0, "both cycle edges go");
    assert_eq!(clean.node_count(), 2);
}

#[test]
fn cycle_breaking_keeps_unrelated_edges() {
    let raw = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("b", "a")
        .edge("a", "z")
        .edge("b", "z")
        .build_raw();

    let clean = sanitize(raw);
    assert!(clean.find_cycle().is_none());
    // The a<->b cycle is removed; the edges into z are not on any cycle.
    assert!(clean.edges().any(|(p, c, _)| p.as_str() == "a" && c.as_str() == "z"));
    assert!(clean.edges().any(|(p, c, _)| p.as_str() == "b" && c.as_str() == "z"));
}

#[test]
fn cycle_selection_is_deterministic() {
    let build = || {
        RawGraphBuilder::new()
            .edge("m", "n")
            .edge("n", "m")
            .edge("p", "q")
            .edge("q", "p")
            .build_raw()
    };

    assert_eq!(sanitize(build()), sanitize(build()));
}

#[test]
fn find_cycle_reports_edge_sequence() {
    let raw = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "a")
        .build_raw();

    let cycle = raw.find_cycle().expect("graph has a cycle");
    assert_eq!(cycle.len(), 3);
    // Edges chain up: each consumer is the next producer, wrapping around.
    for window in cycle.windows(2) {
        assert_eq!(window[0].1, window[1].0);
    }
    assert_eq!(cycle.last().unwrap().1, cycle.first().unwrap().0);
}

#[test]
fn frozen_graph_refuses_cycles() {
    let raw = RawGraphBuilder::new().edge("a", "b").edge("b", "a").build_raw();

    let err = PrecedenceGraph::from_raw(raw).unwrap_err();
    assert!(matches!(err, LinedagError::CyclicGraph(_)));
}

#[test]
fn acyclic_graph_passes_through_untouched() {
    let raw = RawGraphBuilder::new().chain(&["a", "b", "c"]).build_raw();
    let clean = sanitize(raw.clone());
    assert_eq!(raw, clean);
}
