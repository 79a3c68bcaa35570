use crate::aggregate::{LevelCounts, LevelSnapshot};
use crate::classify::LogRecord;
use crate::report::{ReportError, ensure_output_dir, quote_field, render_csv, write_output};
use std::path::{Path, PathBuf};

pub const LEVEL_COUNTS_FILE: &str = "level_counts.csv";
pub const LEVEL_SAMPLE_FILE: &str = "level_sample.csv";
pub const LEVEL_SUMMARY_FILE: &str = "level_summary.txt";

/// `x / denom` as a percentage with two decimals; `0.00%` when `denom` is 0.
pub fn percentage(x: u64, denom: u64) -> String {
    if denom == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", x as f64 / denom as f64 * 100.0)
}

pub fn render_level_counts(counts: &LevelCounts) -> String {
    render_csv(
        "log_level,count",
        counts
            .iter()
            .filter(|(_, c)| *c > 0)
            .map(|(level, c)| vec![level.to_string(), c.to_string()]),
    )
}

pub fn render_level_sample(sample: &[LogRecord]) -> String {
    render_csv(
        "log_entry,log_level",
        sample.iter().map(|r| {
            vec![
                quote_field(&r.raw_text),
                r.level.map(|l| l.to_string()).unwrap_or_default(),
            ]
        }),
    )
}

pub fn render_level_summary(counts: &LevelCounts) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Total log lines processed: {}\n\
         Total lines with log levels: {}\n\
         Unique log levels found: {}\n\n",
        counts.total_lines(),
        counts.level_lines(),
        counts.distinct_levels()
    ));

    out.push_str("Log level distribution:\n");
    for (level, count) in counts.iter() {
        out.push_str(&format!(
            "  {:<5}: {:>10} ({})\n",
            level.as_str(),
            count,
            percentage(count, counts.level_lines())
        ));
    }

    out
}

/// Writes the counts table, the sample table and the text summary.
pub fn write_level_reports(
    out_dir: &Path,
    snapshot: &LevelSnapshot,
) -> Result<Vec<PathBuf>, ReportError> {
    ensure_output_dir(out_dir)?;

    Ok(vec![
        write_output(out_dir, LEVEL_COUNTS_FILE, &render_level_counts(&snapshot.counts))?,
        write_output(out_dir, LEVEL_SAMPLE_FILE, &render_level_sample(&snapshot.sample))?,
        write_output(
            out_dir,
            LEVEL_SUMMARY_FILE,
            &render_level_summary(&snapshot.counts),
        )?,
    ])
}
