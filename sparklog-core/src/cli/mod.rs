//! Command entry points shared by the `sparklog` binary and the
//! integration tests.
//!
//! Each report checks the corpus precondition, runs its single pass, and
//! returns the paths it wrote.

pub mod conf;
mod levels;
mod timeline;

pub use levels::run_levels;
pub use timeline::run_timeline;

use crate::conf::AnalyzerConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Level report followed by the timeline report.
pub fn run_all(cfg: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    let mut written = run_levels(cfg)?;
    written.extend(run_timeline(cfg)?);
    Ok(written)
}
