// src/types.rs

//! Identifier aliases shared across the crate.
//!
//! Both identifiers are opaque: the core only compares, hashes and orders
//! them. The driver happens to feed in workflow names and normalized
//! dataset paths, but nothing below `ingest` knows that.

/// Identifier of a task (a workflow, job, or other unit of execution).
pub type TaskId = String;

/// Identifier of an artifact (a dataset, file, table, ...) read or written
/// by a task.
pub type ArtifactId = String;
