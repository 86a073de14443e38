// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `linedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "linedag",
    version,
    about = "Build a precedence DAG from task lineage records and cluster it for parallel execution.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Linedag.toml` in the current working directory is used
    /// when present; otherwise defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Read lineage records (one JSON object per line) from this file
    /// instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Where to write the edge list. Overrides `[output].path`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Compute and print the schedule but don't write the edge list.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
