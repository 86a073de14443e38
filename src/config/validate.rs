// src/config/validate.rs

use regex::Regex;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LinedagError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LinedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.output, raw.normalize))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_output(cfg)?;
    validate_normalize(cfg)?;
    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.path.trim().is_empty() {
        return Err(LinedagError::ConfigError(
            "[output].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_normalize(cfg: &RawConfigFile) -> Result<()> {
    for pattern in cfg.normalize.strip_patterns.iter() {
        if let Err(e) = Regex::new(pattern) {
            return Err(LinedagError::ConfigError(format!(
                "[normalize].strip_patterns entry '{pattern}' is not a valid regex: {e}"
            )));
        }
    }
    Ok(())
}
