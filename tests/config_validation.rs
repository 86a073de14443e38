use std::io::Write;

use linedag::config::{ConfigFile, RawConfigFile, load_and_validate, load_or_default};
use linedag::errors::LinedagError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_config_gets_defaults() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.output.path, "edges.jsonl");
    assert!(cfg.normalize.enabled);
    assert!(cfg.normalize.strip_patterns.is_empty());
}

#[test]
fn sections_override_defaults() {
    let file = write_config(
        r#"
[output]
path = "out/lineage-edges.jsonl"

[normalize]
enabled = false
strip_patterns = ["^s3://bucket"]
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.output.path, "out/lineage-edges.jsonl");
    assert!(!cfg.normalize.enabled);
    assert_eq!(cfg.normalize.strip_patterns, vec!["^s3://bucket"]);
}

#[test]
fn invalid_strip_pattern_is_rejected() {
    let file = write_config(
        r#"
[normalize]
strip_patterns = ["["]
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, LinedagError::ConfigError(_)));
}

#[test]
fn empty_output_path_is_rejected() {
    let file = write_config(
        r#"
[output]
path = "  "
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, LinedagError::ConfigError(_)));
}

#[test]
fn broken_toml_is_a_toml_error() {
    let file = write_config("[output\npath = nope");
    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, LinedagError::TomlError(_)));
}

#[test]
fn explicit_missing_config_propagates_io_error() {
    let err = load_or_default(Some(std::path::Path::new(
        "/definitely/not/a/real/Linedag.toml",
    )))
    .unwrap_err();
    assert!(matches!(err, LinedagError::IoError(_)));
}

#[test]
fn validated_default_matches_raw_default() {
    let from_raw = ConfigFile::try_from(RawConfigFile::default()).unwrap();
    let plain = ConfigFile::default();

    assert_eq!(from_raw.output.path, plain.output.path);
    assert_eq!(from_raw.normalize.enabled, plain.normalize.enabled);
}
