// src/dag/bernstein.rs

//! Bernstein's conditions for pairwise parallel safety.
//!
//! Bernstein, Arthur J. "Analysis of programs for parallel processing."
//! IEEE Transactions on Electronic Computers 15 (1966): 757-763.

use std::collections::BTreeSet;

use crate::dag::graph::PrecedenceGraph;
use crate::errors::Result;

/// Can `a` and `b` run in parallel without a flow or anti-dependency
/// violation?
///
/// With `in(x) = predecessors(x) ∪ {x}` and `out(x) = successors(x) ∪ {x}`,
/// the checks are:
///
/// - `out(a) ∩ in(b) = ∅` — no flow dependency (`a` feeds `b`)
/// - `in(a) ∩ out(b) = ∅` — no anti-dependency (`b` feeds `a`)
///
/// The third Bernstein condition (`out(a) ∩ out(b) = ∅`, output dependency)
/// is intentionally excluded: tasks that merely share a downstream consumer
/// are still reported as parallel-safe.
///
/// Symmetric in its arguments; pure; cost proportional to the neighbor-set
/// sizes. Fails with `NodeNotFound` if either node is absent.
pub fn parallel_safe(graph: &PrecedenceGraph, a: &str, b: &str) -> Result<bool> {
    let a_in = with_self(graph.predecessors(a)?, a);
    let a_out = with_self(graph.successors(a)?, a);
    let b_in = with_self(graph.predecessors(b)?, b);
    let b_out = with_self(graph.successors(b)?, b);

    Ok(a_out.is_disjoint(&b_in) && a_in.is_disjoint(&b_out))
}

fn with_self<'a>(neighbors: &'a BTreeSet<String>, node: &'a str) -> BTreeSet<&'a str> {
    let mut set: BTreeSet<&str> = neighbors.iter().map(String::as_str).collect();
    set.insert(node);
    set
}
