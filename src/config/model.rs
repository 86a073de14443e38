// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from `Linedag.toml`:
///
/// ```toml
/// [output]
/// path = "edges.jsonl"
///
/// [normalize]
/// enabled = true
/// strip_patterns = ["^s3://my-bucket"]
/// ```
///
/// All sections are optional and have defaults; a missing config file is
/// equivalent to an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Edge-list output settings from `[output]`.
    #[serde(default)]
    pub output: OutputSection,

    /// Artifact-path normalization settings from `[normalize]`.
    #[serde(default)]
    pub normalize: NormalizeSection,
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            output: OutputSection::default(),
            normalize: NormalizeSection::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Where the persisted edge list goes. Overridable with `--output`.
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_output_path() -> String {
    "edges.jsonl".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// `[normalize]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSection {
    /// Disable to pass artifact paths through untouched (whitespace is
    /// still trimmed).
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extra regex strip rules, appended to the built-in ones.
    #[serde(default)]
    pub strip_patterns: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizeSection {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            strip_patterns: Vec::new(),
        }
    }
}

/// Validated configuration. Construct via `TryFrom<RawConfigFile>`; the
/// fields are the same, the type just marks that validation ran.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub normalize: NormalizeSection,
}

impl ConfigFile {
    /// Used by `TryFrom<RawConfigFile>` after validation; not meant for
    /// direct construction elsewhere.
    pub fn new_unchecked(output: OutputSection, normalize: NormalizeSection) -> Self {
        Self { output, normalize }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(OutputSection::default(), NormalizeSection::default())
    }
}
