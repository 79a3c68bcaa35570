//! Plain-text charts.
//!
//! Rendered the same way the terminal stats view draws its latency bars, so
//! the output can be read with `cat` and diffed between runs.

use crate::aggregate::TimelineSnapshot;
use crate::report::histogram::LogHistogram;

const BAR_WIDTH: usize = 40;
pub const DURATION_BINS: usize = 50;

fn bar(count: u64, max: u64) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(1))
}

/// Ranked bar chart of applications per cluster, with value labels.
pub fn render_bar_chart(snapshot: &TimelineSnapshot) -> String {
    let mut out = String::new();
    out.push_str("Applications per Cluster\n");
    out.push_str("========================\n");

    let ranked = snapshot.ranked_clusters();
    let Some(max) = ranked.first().map(|c| c.num_applications) else {
        out.push_str("<no data>\n");
        return out;
    };

    for cluster in ranked {
        out.push_str(&format!(
            "  {:<13} {:<width$} {}\n",
            cluster.cluster_id,
            bar(cluster.num_applications, max),
            cluster.num_applications,
            width = BAR_WIDTH,
        ));
    }

    out.push_str("\nx: Cluster ID | y: Number of Applications\n");
    out
}

/// Log-scale histogram of job durations for the busiest cluster.
///
/// Bin edges are log-spaced. This differs from linear bins drawn on a log
/// axis: each row covers the same ratio of durations, not the same width.
///
/// Non-positive durations are dropped and the rest clamped to at least one
/// second. With nothing left to plot a placeholder is rendered instead.
pub fn render_duration_histogram(snapshot: &TimelineSnapshot) -> String {
    let cluster_id = snapshot
        .busiest_cluster()
        .map(|c| c.cluster_id.as_str())
        .unwrap_or("N/A");

    let durations: Vec<f64> = snapshot
        .durations_for(cluster_id)
        .iter()
        .filter(|d| **d > 0)
        .map(|d| (*d as f64).max(1.0))
        .collect();

    let Some(hist) = LogHistogram::from_values(&durations, DURATION_BINS) else {
        return format!("Duration Distribution (No Data) - Cluster {cluster_id}\n");
    };

    let mut out = format!(
        "Job Duration Distribution (n={}) - Cluster {}\n",
        hist.total(),
        cluster_id
    );
    out.push_str("Duration (seconds, log scale)\n\n");

    let bins = hist.snapshot();
    let max = bins.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in &bins {
        out.push_str(&format!(
            "  {:<14} {:<width$} {}\n",
            label,
            bar(*count, max),
            count,
            width = BAR_WIDTH,
        ));
    }

    out
}
