// src/dag/cluster.rs

//! Greedy clustering of the topological order into parallel-safe groups.

use std::collections::BTreeMap;

use tracing::debug;

use crate::dag::bernstein::parallel_safe;
use crate::dag::graph::PrecedenceGraph;
use crate::errors::{LinedagError, Result};
use crate::types::TaskId;

/// An ordered group of tasks that may execute concurrently with each other.
pub type Cluster = Vec<TaskId>;

/// Ordered sequence of clusters. The executor may parallelize within a
/// cluster and must serialize across clusters in order.
pub type Schedule = Vec<Cluster>;

/// Partition the graph's topological order into a schedule.
///
/// Scans consecutive pairs `(u, v)` of the deterministic topological order:
/// an unsafe pair forces a cluster boundary, a safe pair lets `v` join the
/// cluster `u` sits in. If the final node is left unplaced by the scan (the
/// last pair was unsafe and `u` itself opened a fresh cluster), it becomes a
/// trailing singleton; being topologically last, that cannot reorder any
/// edge.
///
/// Postconditions, enforced rather than assumed: every node appears in
/// exactly one cluster, the cluster count never exceeds the node count, and
/// no edge points from a later cluster to an earlier one. A violation is an
/// internal error; a partial schedule is never returned.
pub fn cluster(graph: &PrecedenceGraph) -> Result<Schedule> {
    let order = graph.topological_order();

    // Degenerate sizes are explicit: the pairwise scan below produces
    // nothing for fewer than two nodes.
    match order.as_slice() {
        [] => return Ok(Vec::new()),
        [only] => return Ok(vec![vec![only.clone()]]),
        _ => {}
    }

    let mut clusters: Schedule = Vec::new();

    for pair in order.windows(2) {
        let (u, v) = (&pair[0], &pair[1]);

        let u_in_last = clusters.last().is_some_and(|last| last.contains(u));

        match (parallel_safe(graph, u, v)?, u_in_last) {
            // Unsafe pair: force a boundary. `u` opens a fresh cluster
            // unless it was already placed, in which case `v` does.
            (false, false) => clusters.push(vec![u.clone()]),
            (false, true) => clusters.push(vec![v.clone()]),
            // Safe pair: `v` joins `u`'s cluster.
            (true, true) => {
                if let Some(last) = clusters.last_mut() {
                    last.push(v.clone());
                }
            }
            (true, false) => clusters.push(vec![u.clone(), v.clone()]),
        }
    }

    // A node is in the last cluster at the moment it is placed, and the
    // final node has no later pair, so "absent from the last cluster" means
    // "never placed".
    if let (Some(tail), Some(last)) = (order.last(), clusters.last()) {
        if !last.contains(tail) {
            clusters.push(vec![tail.clone()]);
        }
    }

    verify_schedule(graph, &clusters)?;

    debug!(
        nodes = graph.node_count(),
        clusters = clusters.len(),
        "clustered topological order"
    );

    Ok(clusters)
}

/// Check the schedule postconditions, failing fast on violation.
fn verify_schedule(graph: &PrecedenceGraph, schedule: &Schedule) -> Result<()> {
    let n = graph.node_count();
    let total: usize = schedule.iter().map(Vec::len).sum();

    if total != n {
        return Err(LinedagError::ScheduleInvariant(format!(
            "schedule covers {total} tasks but the graph has {n}"
        )));
    }
    if schedule.len() > n {
        return Err(LinedagError::ScheduleInvariant(format!(
            "{} clusters for {n} tasks",
            schedule.len()
        )));
    }

    let mut position: BTreeMap<&TaskId, usize> = BTreeMap::new();
    for (idx, group) in schedule.iter().enumerate() {
        for task in group {
            if position.insert(task, idx).is_some() {
                return Err(LinedagError::ScheduleInvariant(format!(
                    "task '{task}' scheduled more than once"
                )));
            }
        }
    }

    for (producer, consumer, _) in graph.edges() {
        let (Some(p), Some(c)) = (position.get(producer), position.get(consumer)) else {
            return Err(LinedagError::ScheduleInvariant(format!(
                "edge ({producer}, {consumer}) references an unscheduled task"
            )));
        };
        if p > c {
            return Err(LinedagError::ScheduleInvariant(format!(
                "producer '{producer}' scheduled after consumer '{consumer}'"
            )));
        }
    }

    Ok(())
}
