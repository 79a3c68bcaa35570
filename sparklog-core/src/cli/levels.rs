use crate::aggregate::collect_levels;
use crate::classify::LineClassifier;
use crate::conf::AnalyzerConfig;
use crate::corpus::{ensure_corpus, walk_lines};
use crate::report::write_level_reports;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Level distribution report: one pass over every matched log file.
pub fn run_levels(cfg: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    ensure_corpus(&cfg.raw_dir, &cfg.archive)?;

    let classifier = LineClassifier::new(cfg.century_base);
    let rng = StdRng::seed_from_u64(cfg.seed);
    let mut lines = walk_lines(&cfg.raw_dir, &cfg.log_glob)?;

    tracing::info!(
        raw_dir = %cfg.raw_dir.display(),
        pattern = %cfg.log_glob,
        sample_size = cfg.sample_size,
        seed = cfg.seed,
        "scanning log levels"
    );

    let snapshot = collect_levels(&mut lines, &classifier, cfg.sample_size, rng);

    tracing::info!(
        files = lines.files_read(),
        skipped_files = lines.files_skipped(),
        total_lines = snapshot.counts.total_lines(),
        level_lines = snapshot.counts.level_lines(),
        sampled = snapshot.sample.len(),
        "level scan complete"
    );

    Ok(write_level_reports(&cfg.output_dir, &snapshot)?)
}
