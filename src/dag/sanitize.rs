// src/dag/sanitize.rs

//! Cycle elimination: repair a raw lineage graph into an acyclic one.
//!
//! Lineage data routinely produces self-loops (a task reading back its own
//! output) and genuine cycles (mutually feeding workflows, or noise left
//! over from artifact-path normalization). Downstream algorithms assume
//! acyclicity, so both are removed here, loudly.

use tracing::{error, warn};

use crate::dag::graph::RawGraph;

/// Remove self-loops, then break cycles until none remain.
///
/// Cycle breaking removes *all* edges of one detected cycle per iteration,
/// which may discard more edges than strictly necessary; this is a known
/// limitation, not an optimal feedback-arc-set solver. Cycle selection is
/// deterministic (see [`RawGraph::find_cycle`]), so repeated runs over the
/// same input remove the same edges. Idempotent: sanitizing an already
/// acyclic graph is a no-op.
///
/// Diagnostics: one warning per self-loop batch, one error per removed
/// cycle.
pub fn sanitize(mut graph: RawGraph) -> RawGraph {
    let loops = graph.self_loops();
    if !loops.is_empty() {
        warn!(nodes = ?loops, "removing self-loop edges from lineage graph");
        for node in &loops {
            graph.remove_edge(node, node);
        }
    }

    // Each pass removes at least one edge, so this terminates.
    while let Some(cycle) = graph.find_cycle() {
        error!(edges = ?cycle, "lineage graph contains a cycle; removing its edges");
        for (producer, consumer) in &cycle {
            graph.remove_edge(producer, consumer);
        }
    }

    graph
}
