use linedag::dag::{Schedule, cluster};
use linedag_test_utils::builders::RawGraphBuilder;

fn as_strs(schedule: &Schedule) -> Vec<Vec<&str>> {
    schedule
        .iter()
        .map(|group| group.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn empty_graph_yields_empty_schedule() {
    let graph = RawGraphBuilder::new().build();
    assert!(cluster(&graph).unwrap().is_empty());
}

#[test]
fn single_node_yields_singleton_cluster() {
    let graph = RawGraphBuilder::new().node("x").build();
    assert_eq!(as_strs(&cluster(&graph).unwrap()), vec![vec!["x"]]);
}

#[test]
fn two_disconnected_nodes_share_a_cluster() {
    let graph = RawGraphBuilder::new().node("a").node("b").build();
    assert_eq!(as_strs(&cluster(&graph).unwrap()), vec![vec!["a", "b"]]);
}

#[test]
fn two_node_chain_splits() {
    let graph = RawGraphBuilder::new().edge("a", "b").build();
    assert_eq!(as_strs(&cluster(&graph).unwrap()), vec![vec!["a"], vec!["b"]]);
}

#[test]
fn plain_chain_is_fully_serialized() {
    let graph = RawGraphBuilder::new().chain(&["a", "b", "c", "d"]).build();
    assert_eq!(
        as_strs(&cluster(&graph).unwrap()),
        vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]]
    );
}

#[test]
fn diamond_chain_groups_parallel_middle() {
    let graph = RawGraphBuilder::new()
        .edge("s1", "s2")
        .edge("s1", "s3")
        .edge("s2", "s4")
        .edge("s3", "s4")
        .edge("s4", "s5")
        .build();

    assert_eq!(
        as_strs(&cluster(&graph).unwrap()),
        vec![vec!["s1"], vec!["s2", "s3"], vec!["s4"], vec!["s5"]]
    );
}

#[test]
fn wide_independent_layer_collapses() {
    // One root feeding three independent workers.
    let graph = RawGraphBuilder::new()
        .edge("root", "w1")
        .edge("root", "w2")
        .edge("root", "w3")
        .build();

    assert_eq!(
        as_strs(&cluster(&graph).unwrap()),
        vec![vec!["root"], vec!["w1", "w2", "w3"]]
    );
}

#[test]
fn every_node_is_scheduled_exactly_once() {
    let graph = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("a", "c")
        .edge("b", "d")
        .edge("c", "e")
        .edge("d", "f")
        .edge("e", "f")
        .node("g")
        .build();

    let schedule = cluster(&graph).unwrap();
    let mut seen: Vec<&str> = schedule
        .iter()
        .flat_map(|group| group.iter().map(String::as_str))
        .collect();
    seen.sort_unstable();

    assert_eq!(seen, vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert!(schedule.len() <= graph.node_count());
}

#[test]
fn producers_never_follow_their_consumers() {
    let graph = RawGraphBuilder::new()
        .edge("a", "b")
        .edge("b", "c")
        .edge("a", "d")
        .edge("d", "c")
        .build();

    let schedule = cluster(&graph).unwrap();
    let position = |task: &str| {
        schedule
            .iter()
            .position(|group| group.iter().any(|t| t == task))
            .unwrap()
    };

    for (producer, consumer, _) in graph.edges() {
        assert!(
            position(producer) <= position(consumer),
            "{producer} scheduled after {consumer}"
        );
    }
}
