use crate::conf::{AnalyzerConfig, ConfigError, ConfigOverrides};

use std::fs;
use std::path::Path;

/// Defaults, then the optional TOML file, then command-line overrides.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AnalyzerConfig, ConfigError> {
    let mut cfg = match path {
        Some(path) => parse_config_file(path)?,
        None => AnalyzerConfig::default(),
    };

    overrides.apply(&mut cfg);
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn parse_config_file(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
}

pub fn validate_config(cfg: &AnalyzerConfig) -> Result<(), ConfigError> {
    if cfg.sample_size == 0 {
        return Err(ConfigError::InvalidSampleSize);
    }
    Ok(())
}
