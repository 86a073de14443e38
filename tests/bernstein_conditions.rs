use linedag::dag::parallel_safe;
use linedag::errors::LinedagError;
use linedag_test_utils::builders::RawGraphBuilder;

#[test]
fn flow_dependency_blocks_parallelism() {
    let graph = RawGraphBuilder::new().edge("a", "b").build();
    assert!(!parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn anti_dependency_blocks_parallelism() {
    let graph = RawGraphBuilder::new().edge("b", "a").build();
    assert!(!parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn disconnected_nodes_are_safe() {
    let graph = RawGraphBuilder::new().node("a").node("b").build();
    assert!(parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn shared_predecessor_is_safe() {
    let graph = RawGraphBuilder::new().edge("p", "a").edge("p", "b").build();
    assert!(parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn shared_consumer_is_safe() {
    // Both feed the same downstream task: an output dependency in
    // Bernstein's full formulation, deliberately not checked here.
    let graph = RawGraphBuilder::new().edge("a", "c").edge("b", "c").build();
    assert!(parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn transitive_dependency_is_safe_pairwise() {
    // a -> m -> b: no direct edge between a and b, and the predicate only
    // looks one hop out, so the pair is reported safe. Ordering across
    // clusters is what keeps this correct in a schedule.
    let graph = RawGraphBuilder::new().edge("a", "m").edge("m", "b").build();
    assert!(parallel_safe(&graph, "a", "b").unwrap());
}

#[test]
fn predicate_is_symmetric() {
    let graph = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("b", "c")
        .edge("a", "d")
        .node("e")
        .build();

    let nodes = ["a", "b", "c", "d", "e"];
    for x in nodes {
        for y in nodes {
            assert_eq!(
                parallel_safe(&graph, x, y).unwrap(),
                parallel_safe(&graph, y, x).unwrap(),
                "asymmetry for ({x}, {y})"
            );
        }
    }
}

#[test]
fn absent_node_fails_with_not_found() {
    let graph = RawGraphBuilder::new().edge("a", "b").build();

    assert!(matches!(
        parallel_safe(&graph, "a", "ghost"),
        Err(LinedagError::NodeNotFound(_))
    ));
    assert!(matches!(
        parallel_safe(&graph, "ghost", "b"),
        Err(LinedagError::NodeNotFound(_))
    ));
}
