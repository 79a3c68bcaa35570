use crate::aggregate::collect_timeline;
use crate::classify::LineClassifier;
use crate::conf::AnalyzerConfig;
use crate::corpus::ensure_corpus;
use crate::report::write_timeline_reports;
use anyhow::Result;
use std::path::PathBuf;

/// Cluster usage report: per-application time ranges rolled up by cluster.
pub fn run_timeline(cfg: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    ensure_corpus(&cfg.raw_dir, &cfg.archive)?;

    tracing::info!(raw_dir = %cfg.raw_dir.display(), "scanning application timelines");

    let snapshot = collect_timeline(&cfg.raw_dir, &LineClassifier::new(cfg.century_base))?;

    tracing::info!(
        clusters = snapshot.num_clusters(),
        applications = snapshot.num_applications(),
        "timeline scan complete"
    );

    Ok(write_timeline_reports(&cfg.output_dir, &snapshot)?)
}
