// src/dag/lineage.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::dag::graph::RawGraph;
use crate::types::{ArtifactId, TaskId};

/// One task-level lineage statement: the task read `inputs` and wrote
/// `outputs`.
///
/// Inputs make the task a *consumer* of each artifact, outputs make it a
/// *producer*. Duplicate artifacts within a record are harmless; everything
/// downstream is set-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageRecord {
    pub task: TaskId,
    pub inputs: Vec<ArtifactId>,
    pub outputs: Vec<ArtifactId>,
}

impl LineageRecord {
    pub fn new(
        task: impl Into<TaskId>,
        inputs: Vec<ArtifactId>,
        outputs: Vec<ArtifactId>,
    ) -> Self {
        Self {
            task: task.into(),
            inputs,
            outputs,
        }
    }
}

/// Aggregate lineage records into a raw precedence graph.
///
/// For every artifact, each producer/consumer pair sharing it yields an edge
/// `producer → consumer`, with the artifact unioned into the edge's link set.
/// Every task becomes a node even when no edge touches it. Record order does
/// not affect the result; all intermediate indexes are ordered sets.
///
/// The returned graph may contain self-loops (a task reading what it wrote)
/// and cycles; run it through [`sanitize`] before freezing it.
///
/// [`sanitize`]: crate::dag::sanitize::sanitize
pub fn build_raw_graph<I>(records: I) -> RawGraph
where
    I: IntoIterator<Item = LineageRecord>,
{
    let mut producers: BTreeMap<ArtifactId, BTreeSet<TaskId>> = BTreeMap::new();
    let mut consumers: BTreeMap<ArtifactId, BTreeSet<TaskId>> = BTreeMap::new();
    let mut graph = RawGraph::new();

    for record in records {
        graph.add_node(record.task.clone());
        for input in record.inputs {
            consumers.entry(input).or_default().insert(record.task.clone());
        }
        for output in record.outputs {
            producers.entry(output).or_default().insert(record.task.clone());
        }
    }

    for (artifact, produced_by) in &producers {
        let Some(consumed_by) = consumers.get(artifact) else {
            continue;
        };
        for producer in produced_by {
            for consumer in consumed_by {
                graph.add_link(producer.clone(), consumer.clone(), artifact.clone());
            }
        }
    }

    graph
}
