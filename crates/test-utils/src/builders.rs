#![allow(dead_code)]

use linedag::dag::{LineageRecord, PrecedenceGraph, RawGraph};

/// Shorthand for a lineage record from string slices.
pub fn record(task: &str, inputs: &[&str], outputs: &[&str]) -> LineageRecord {
    LineageRecord::new(
        task,
        inputs.iter().map(|s| s.to_string()).collect(),
        outputs.iter().map(|s| s.to_string()).collect(),
    )
}

/// Builder for `RawGraph` to simplify test setup.
pub struct RawGraphBuilder {
    graph: RawGraph,
}

impl RawGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: RawGraph::new(),
        }
    }

    pub fn node(mut self, id: &str) -> Self {
        self.graph.add_node(id);
        self
    }

    /// Add the edge `producer → consumer` justified by a synthetic artifact
    /// named after the edge.
    pub fn edge(mut self, producer: &str, consumer: &str) -> Self {
        self.graph
            .add_link(producer, consumer, format!("{producer}->{consumer}"));
        self
    }

    /// Add the edge with an explicit artifact link.
    pub fn link(mut self, producer: &str, consumer: &str, artifact: &str) -> Self {
        self.graph.add_link(producer, consumer, artifact);
        self
    }

    /// Add edges forming a chain `a → b → c → ...`.
    pub fn chain(mut self, tasks: &[&str]) -> Self {
        for pair in tasks.windows(2) {
            self.graph
                .add_link(pair[0], pair[1], format!("{}->{}", pair[0], pair[1]));
        }
        self
    }

    pub fn build_raw(self) -> RawGraph {
        self.graph
    }

    /// Freeze into a `PrecedenceGraph`, panicking on a cyclic input; tests
    /// that exercise cycle handling use `build_raw` instead.
    pub fn build(self) -> PrecedenceGraph {
        PrecedenceGraph::from_raw(self.graph).expect("builder produced a cyclic graph")
    }
}

impl Default for RawGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
