// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod types;

use std::path::Path;

use anyhow::Result;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::dag::{LineageRecord, PrecedenceGraph, Schedule, build_raw_graph, cluster, sanitize};
use crate::ingest::{Normalizer, parse_line};
use crate::types::ArtifactId;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - JSON-lines ingest + artifact normalization
/// - lineage aggregation, cycle elimination, clustering
/// - edge-list export
///
/// The schedule goes to stdout, one cluster per line; diagnostics go to
/// stderr via `tracing`.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = config::load_or_default(args.config.as_deref().map(Path::new))?;
    let normalizer = Normalizer::from_config(&cfg.normalize)?;

    let records = match args.input.as_deref() {
        Some(path) => {
            let file = File::open(path).await?;
            collect_records(BufReader::new(file), &normalizer).await?
        }
        None => collect_records(BufReader::new(tokio::io::stdin()), &normalizer).await?,
    };

    info!(records = records.len(), "aggregating lineage records");

    let raw = build_raw_graph(records);
    let acyclic = sanitize(raw);
    let graph = PrecedenceGraph::from_raw(acyclic)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "precedence graph frozen"
    );

    let schedule = cluster(&graph)?;

    if args.dry_run {
        info!("dry-run: skipping edge-list export");
    } else {
        let path = args.output.unwrap_or_else(|| cfg.output.path.clone());
        let file = std::fs::File::create(&path)?;
        export::write_edge_list(&graph, std::io::BufWriter::new(file))?;
        info!(path = %path, edges = graph.edge_count(), "wrote edge list");
    }

    print_schedule(&schedule);

    Ok(())
}

/// Read JSON-lines lineage records, normalizing artifact paths as they come
/// in. Malformed lines are skipped with a warning; a bad exporter record
/// should not sink the whole batch.
async fn collect_records<R>(reader: R, normalizer: &Normalizer) -> Result<Vec<LineageRecord>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut records = Vec::new();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(record) => records.push(normalize_record(record, normalizer)),
            Err(e) => warn!(line = line_no, error = %e, "skipping malformed lineage record"),
        }
    }

    Ok(records)
}

fn normalize_record(record: LineageRecord, normalizer: &Normalizer) -> LineageRecord {
    LineageRecord {
        task: record.task,
        inputs: clean_artifacts(record.inputs, normalizer),
        outputs: clean_artifacts(record.outputs, normalizer),
    }
}

/// Artifacts that normalize down to nothing were pure noise (a bare date
/// partition, say) and are dropped rather than matched against each other.
fn clean_artifacts(artifacts: Vec<ArtifactId>, normalizer: &Normalizer) -> Vec<ArtifactId> {
    artifacts
        .into_iter()
        .map(|a| normalizer.clean(&a))
        .filter(|a| !a.is_empty())
        .collect()
}

/// Print the schedule: one cluster per line, tasks space-separated.
fn print_schedule(schedule: &Schedule) {
    for group in schedule {
        println!("{}", group.join(" "));
    }
}
