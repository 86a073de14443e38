// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{LinedagError, Result};
use crate::types::{ArtifactId, TaskId};

/// Mutable directed graph of producer→consumer edges, as built straight from
/// lineage records. May contain self-loops and cycles; [`sanitize`] repairs it
/// before it is frozen into a [`PrecedenceGraph`].
///
/// Every collection is a BTree so that iteration order, and everything derived
/// from it (cycle selection, diagnostics, exports), is independent of the
/// order in which records arrived.
///
/// [`sanitize`]: crate::dag::sanitize::sanitize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGraph {
    /// Edge payloads keyed by (producer, consumer): the artifacts whose
    /// shared producer/consumer relationship justifies the edge.
    links: BTreeMap<(TaskId, TaskId), BTreeSet<ArtifactId>>,
    /// Successors per node. Every node has an entry, possibly empty.
    succs: BTreeMap<TaskId, BTreeSet<TaskId>>,
    /// Predecessors per node. Every node has an entry, possibly empty.
    preds: BTreeMap<TaskId, BTreeSet<TaskId>>,
}

impl RawGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task, with no edges yet. Idempotent.
    pub fn add_node(&mut self, id: impl Into<TaskId>) {
        let id = id.into();
        self.succs.entry(id.clone()).or_default();
        self.preds.entry(id).or_default();
    }

    /// Add (or extend) the edge `producer → consumer`, justified by
    /// `artifact`. Both endpoints are registered as nodes if needed.
    pub fn add_link(
        &mut self,
        producer: impl Into<TaskId>,
        consumer: impl Into<TaskId>,
        artifact: impl Into<ArtifactId>,
    ) {
        let producer = producer.into();
        let consumer = consumer.into();
        self.add_node(producer.clone());
        self.add_node(consumer.clone());

        if let Some(s) = self.succs.get_mut(&producer) {
            s.insert(consumer.clone());
        }
        if let Some(p) = self.preds.get_mut(&consumer) {
            p.insert(producer.clone());
        }
        self.links
            .entry((producer, consumer))
            .or_default()
            .insert(artifact.into());
    }

    /// Remove the edge `producer → consumer`, returning its link set if the
    /// edge existed. Endpoint nodes stay in the graph.
    pub fn remove_edge(&mut self, producer: &str, consumer: &str) -> Option<BTreeSet<ArtifactId>> {
        let removed = self
            .links
            .remove(&(producer.to_string(), consumer.to_string()))?;
        if let Some(s) = self.succs.get_mut(producer) {
            s.remove(consumer);
        }
        if let Some(p) = self.preds.get_mut(consumer) {
            p.remove(producer);
        }
        Some(removed)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.succs.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.succs.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TaskId> {
        self.succs.keys()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// All edges as `(producer, consumer, links)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&TaskId, &TaskId, &BTreeSet<ArtifactId>)> {
        self.links.iter().map(|((p, c), links)| (p, c, links))
    }

    /// Nodes carrying a `node → node` edge, in ascending order.
    pub fn self_loops(&self) -> Vec<TaskId> {
        self.links
            .keys()
            .filter(|(p, c)| p == c)
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Find one cycle and return its edge sequence, or `None` if the graph is
    /// acyclic.
    ///
    /// Deterministic selection rule: depth-first traversal rooted at nodes in
    /// ascending identifier order, visiting successors in ascending identifier
    /// order; the first back edge encountered closes the reported cycle.
    pub fn find_cycle(&self) -> Option<Vec<(TaskId, TaskId)>> {
        let mut marks: BTreeMap<&TaskId, Mark> = BTreeMap::new();
        let mut path: Vec<&TaskId> = Vec::new();

        for root in self.succs.keys() {
            if marks.contains_key(root) {
                continue;
            }
            if let Some(cycle) = self.dfs_cycle(root, &mut marks, &mut path) {
                return Some(cycle);
            }
        }
        None
    }

    fn dfs_cycle<'a>(
        &'a self,
        node: &'a TaskId,
        marks: &mut BTreeMap<&'a TaskId, Mark>,
        path: &mut Vec<&'a TaskId>,
    ) -> Option<Vec<(TaskId, TaskId)>> {
        marks.insert(node, Mark::InProgress);
        path.push(node);

        if let Some(succs) = self.succs.get(node) {
            for next in succs {
                match marks.get(next) {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => {
                        // Back edge: `next` is on the current path, so the
                        // cycle runs from `next` down to `node` and back.
                        if let Some(start) = path.iter().position(|n| *n == next) {
                            let mut cycle: Vec<(TaskId, TaskId)> = path[start..]
                                .windows(2)
                                .map(|w| ((*w[0]).clone(), (*w[1]).clone()))
                                .collect();
                            cycle.push((node.clone(), next.clone()));
                            return Some(cycle);
                        }
                    }
                    None => {
                        if let Some(cycle) = self.dfs_cycle(next, marks, path) {
                            return Some(cycle);
                        }
                    }
                }
            }
        }

        path.pop();
        marks.insert(node, Mark::Done);
        None
    }
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    InProgress,
    Done,
}

/// Frozen, validated-acyclic precedence graph.
///
/// The constructor refuses a graph that still contains a cycle; every
/// consumer (topological order, Bernstein checks, clustering) assumes
/// acyclicity unconditionally.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph {
    raw: RawGraph,
}

impl PrecedenceGraph {
    /// Freeze a sanitized [`RawGraph`].
    ///
    /// Fails with [`LinedagError::CyclicGraph`] if the input is still cyclic;
    /// this is a fatal invariant, not a recoverable condition.
    pub fn from_raw(raw: RawGraph) -> Result<Self> {
        // Independent acyclicity check via petgraph: a topological sort
        // fails iff there is a cycle.
        let mut check: DiGraphMap<&str, ()> = DiGraphMap::new();
        for node in raw.nodes() {
            check.add_node(node.as_str());
        }
        for (p, c, _) in raw.edges() {
            check.add_edge(p.as_str(), c.as_str(), ());
        }

        match toposort(&check, None) {
            Ok(_order) => Ok(Self { raw }),
            Err(cycle) => Err(LinedagError::CyclicGraph(format!(
                "cycle involving task '{}'",
                cycle.node_id()
            ))),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.raw.contains(id)
    }

    pub fn node_count(&self) -> usize {
        self.raw.node_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TaskId> {
        self.raw.nodes()
    }

    pub fn edge_count(&self) -> usize {
        self.raw.edge_count()
    }

    /// All edges as `(producer, consumer, links)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&TaskId, &TaskId, &BTreeSet<ArtifactId>)> {
        self.raw.edges()
    }

    /// Link set of the edge `producer → consumer`, if present.
    pub fn links(&self, producer: &str, consumer: &str) -> Option<&BTreeSet<ArtifactId>> {
        self.raw
            .links
            .get(&(producer.to_string(), consumer.to_string()))
    }

    /// Immediate predecessors of `id` (tasks that must complete before it).
    pub fn predecessors(&self, id: &str) -> Result<&BTreeSet<TaskId>> {
        self.raw
            .preds
            .get(id)
            .ok_or_else(|| LinedagError::NodeNotFound(id.to_string()))
    }

    /// Immediate successors of `id` (tasks that must wait for it).
    pub fn successors(&self, id: &str) -> Result<&BTreeSet<TaskId>> {
        self.raw
            .succs
            .get(id)
            .ok_or_else(|| LinedagError::NodeNotFound(id.to_string()))
    }

    /// Deterministic total topological order: Kahn's algorithm, breaking ties
    /// among ready nodes by ascending identifier.
    ///
    /// Always covers every node, since the constructor guarantees acyclicity.
    pub fn topological_order(&self) -> Vec<TaskId> {
        let mut indegree: BTreeMap<&TaskId, usize> = self
            .raw
            .preds
            .iter()
            .map(|(node, preds)| (node, preds.len()))
            .collect();

        let mut ready: BTreeSet<&TaskId> = indegree
            .iter()
            .filter(|(_, deg)| **deg == 0)
            .map(|(node, _)| *node)
            .collect();

        let mut order = Vec::with_capacity(self.node_count());

        while let Some(node) = ready.pop_first() {
            order.push(node.clone());

            if let Some(succs) = self.raw.succs.get(node) {
                for next in succs {
                    if let Some(deg) = indegree.get_mut(next) {
                        *deg -= 1;
                        if *deg == 0 {
                            ready.insert(next);
                        }
                    }
                }
            }
        }

        debug_assert_eq!(order.len(), self.node_count());
        order
    }
}
