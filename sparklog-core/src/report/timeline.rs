use crate::aggregate::TimelineSnapshot;
use crate::report::{
    ReportError, ensure_output_dir, render_bar_chart, render_csv, render_duration_histogram,
    write_output,
};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const TIMELINE_FILE: &str = "timeline.csv";
pub const CLUSTER_SUMMARY_FILE: &str = "cluster_summary.csv";
pub const CLUSTER_STATS_FILE: &str = "cluster_stats.txt";
pub const BAR_CHART_FILE: &str = "cluster_bar_chart.txt";
pub const DURATION_HISTOGRAM_FILE: &str = "duration_histogram.txt";

const TOP_CLUSTERS: usize = 10;

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn render_timeline(snapshot: &TimelineSnapshot) -> String {
    render_csv(
        "cluster_id,application_id,app_number,start_time,end_time",
        snapshot.timeline.iter().map(|r| {
            vec![
                r.application.cluster_id.clone(),
                r.application.application_id(),
                r.application.app_number.clone(),
                format_timestamp(&r.start),
                format_timestamp(&r.end),
            ]
        }),
    )
}

pub fn render_cluster_summary(snapshot: &TimelineSnapshot) -> String {
    render_csv(
        "cluster_id,num_applications,cluster_first_app,cluster_last_app",
        snapshot.clusters.iter().map(|c| {
            vec![
                c.cluster_id.clone(),
                c.num_applications.to_string(),
                format_timestamp(&c.first),
                format_timestamp(&c.last),
            ]
        }),
    )
}

pub fn render_cluster_stats(snapshot: &TimelineSnapshot) -> String {
    let mut out = format!(
        "Total unique clusters: {}\n\
         Total applications: {}\n\
         Average applications per cluster: {:.2}\n\n",
        snapshot.num_clusters(),
        snapshot.num_applications(),
        snapshot.average_applications_per_cluster()
    );

    out.push_str("Most heavily used clusters:\n");
    for cluster in snapshot.ranked_clusters().into_iter().take(TOP_CLUSTERS) {
        out.push_str(&format!(
            "  Cluster {}: {} applications\n",
            cluster.cluster_id, cluster.num_applications
        ));
    }

    out
}

/// Writes both tables, the stats summary and both charts.
pub fn write_timeline_reports(
    out_dir: &Path,
    snapshot: &TimelineSnapshot,
) -> Result<Vec<PathBuf>, ReportError> {
    ensure_output_dir(out_dir)?;

    Ok(vec![
        write_output(out_dir, TIMELINE_FILE, &render_timeline(snapshot))?,
        write_output(
            out_dir,
            CLUSTER_SUMMARY_FILE,
            &render_cluster_summary(snapshot),
        )?,
        write_output(out_dir, CLUSTER_STATS_FILE, &render_cluster_stats(snapshot))?,
        write_output(out_dir, BAR_CHART_FILE, &render_bar_chart(snapshot))?,
        write_output(
            out_dir,
            DURATION_HISTOGRAM_FILE,
            &render_duration_histogram(snapshot),
        )?,
    ])
}
