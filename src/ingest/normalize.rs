// src/ingest/normalize.rs

//! Artifact-path normalization.
//!
//! Lineage paths carry environment noise: namenode authorities, partition
//! templates, concrete dates, `key=123` fragments. Two tasks touching the
//! same dataset through differently partitioned paths must still match, so
//! the noise is stripped before aggregation.

use regex::Regex;

use crate::config::model::NormalizeSection;
use crate::errors::{LinedagError, Result};

/// Built-in strip rules, applied as one alternation.
///
/// In order: HDFS authority prefix, trailing upper-case leaf directory,
/// partition template variables, templated dates, literal dates, and
/// `key=123`-style numeric fragments.
const BUILTIN_PATTERNS: &[&str] = &[
    r"^hdfs://nameservice1",
    r"/[A-Z]+$",
    r"(\w+=)?\$\{(YEAR|MONTH|DAY|HOUR|MINUTE)\}\W?",
    r"(\w+=)?\$\{YEAR\}\W\$\{MONTH\}\W\$\{DAY\}",
    r"\d\d\d\d\W\d\d\W\d\d",
    r"(\w+=)?\d+\W?",
];

/// Compiled normalization rules.
#[derive(Debug, Clone)]
pub struct Normalizer {
    pattern: Regex,
    enabled: bool,
}

impl Normalizer {
    /// Build from the `[normalize]` config section: built-in rules plus any
    /// configured extras. Fails with a config error if an extra pattern does
    /// not compile (validation reports this earlier with a friendlier
    /// message; this is the backstop).
    pub fn from_config(cfg: &NormalizeSection) -> Result<Self> {
        let patterns: Vec<&str> = BUILTIN_PATTERNS
            .iter()
            .copied()
            .chain(cfg.strip_patterns.iter().map(String::as_str))
            .collect();

        let alternation = format!("({})", patterns.join("|"));
        let pattern = Regex::new(&alternation).map_err(|e| {
            LinedagError::ConfigError(format!("invalid normalization pattern: {e}"))
        })?;

        Ok(Self {
            pattern,
            enabled: cfg.enabled,
        })
    }

    /// Normalize one artifact path.
    ///
    /// The strip pass runs twice: removing a prefix or template can expose
    /// text (a date behind an authority, say) that only a second pass
    /// catches. May return an empty string when the whole path was noise;
    /// callers drop those artifacts.
    pub fn clean(&self, artifact: &str) -> String {
        if !self.enabled {
            return artifact.trim().to_string();
        }
        self.strip(&self.strip(artifact))
    }

    fn strip(&self, s: &str) -> String {
        let stripped = self.pattern.replace_all(s.trim(), "");
        normalize_path(&stripped)
    }
}

/// Collapse duplicate separators and `.` components, drop any trailing
/// separator. Purely textual; nothing is resolved against a filesystem.
fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let parts: Vec<&str> = path
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
