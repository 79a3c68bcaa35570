use crate::classify::DEFAULT_CENTURY_BASE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOG_GLOB: &str = "application_*/*.log";
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_SEED: u64 = 42;

/// Resolved settings for a run.
///
/// Every key is optional in the TOML file; missing keys fall back to the
/// values in [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Root holding the extracted `application_*` directories.
    pub raw_dir: PathBuf,

    /// Only named in the "source not found" error; never unpacked.
    pub archive: PathBuf,

    pub output_dir: PathBuf,

    /// Log files fed to the level report, relative to `raw_dir`.
    pub log_glob: String,

    pub sample_size: usize,

    pub seed: u64,

    /// Two-digit years are added to this.
    pub century_base: i32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            archive: PathBuf::from("data/raw/Spark.tar.gz"),
            output_dir: PathBuf::from("data/output"),
            log_glob: DEFAULT_LOG_GLOB.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            century_base: DEFAULT_CENTURY_BASE,
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub raw_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(self, cfg: &mut AnalyzerConfig) {
        if let Some(raw_dir) = self.raw_dir {
            cfg.raw_dir = raw_dir;
        }
        if let Some(output_dir) = self.output_dir {
            cfg.output_dir = output_dir;
        }
        if let Some(sample_size) = self.sample_size {
            cfg.sample_size = sample_size;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
    }
}
