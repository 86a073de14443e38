// src/dag/mod.rs

//! Precedence-graph construction and clustering.
//!
//! - [`lineage`] aggregates lineage records into a raw producer→consumer graph.
//! - [`sanitize`] repairs the raw graph into an acyclic one.
//! - [`graph`] holds the graph types and topological ordering.
//! - [`bernstein`] is the pairwise parallel-safety predicate.
//! - [`cluster`] partitions the topological order into a schedule.

pub mod bernstein;
pub mod cluster;
pub mod graph;
pub mod lineage;
pub mod sanitize;

pub use bernstein::parallel_safe;
pub use cluster::{Cluster, Schedule, cluster};
pub use graph::{PrecedenceGraph, RawGraph};
pub use lineage::{LineageRecord, build_raw_graph};
pub use sanitize::sanitize;
