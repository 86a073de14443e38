// src/export.rs

//! Flat edge-list export for external persistence and visualization.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::dag::PrecedenceGraph;
use crate::errors::Result;
use crate::types::{ArtifactId, TaskId};

/// One exported edge: producer must run before consumer, justified by
/// `links`. Links are emitted in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub producer: TaskId,
    pub consumer: TaskId,
    pub links: Vec<ArtifactId>,
}

/// Enumerate the graph's edges as exportable records, in ascending
/// (producer, consumer) order.
pub fn edge_records(graph: &PrecedenceGraph) -> Vec<EdgeRecord> {
    graph
        .edges()
        .map(|(producer, consumer, links)| EdgeRecord {
            producer: producer.clone(),
            consumer: consumer.clone(),
            links: links.iter().cloned().collect(),
        })
        .collect()
}

/// Write the edge list as JSON lines, one edge per line.
pub fn write_edge_list<W: Write>(graph: &PrecedenceGraph, mut writer: W) -> Result<()> {
    for record in edge_records(graph) {
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
