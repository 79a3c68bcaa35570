use crate::aggregate::{AppTimeRange, scan_application};
use crate::classify::LineClassifier;
use crate::corpus::{CorpusError, application_dirs};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub cluster_id: String,
    pub num_applications: u64,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// Folds per-application time ranges into timeline rows and per-cluster
/// summaries.
///
/// Cluster ids are fixed-width (13 digits), so keying by the string keeps
/// numeric order.
#[derive(Debug, Default)]
pub struct TimelineAggregator {
    timeline: Vec<AppTimeRange>,
    clusters: BTreeMap<String, ClusterSummary>,
    durations: BTreeMap<String, Vec<i64>>,
}

impl TimelineAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: AppTimeRange) {
        let cluster_id = &range.application.cluster_id;

        self.clusters
            .entry(cluster_id.clone())
            .and_modify(|c| {
                c.num_applications += 1;
                c.first = c.first.min(range.start);
                c.last = c.last.max(range.end);
            })
            .or_insert_with(|| ClusterSummary {
                cluster_id: cluster_id.clone(),
                num_applications: 1,
                first: range.start,
                last: range.end,
            });

        self.durations
            .entry(cluster_id.clone())
            .or_default()
            .push(range.duration().num_seconds());

        self.timeline.push(range);
    }

    pub fn snapshot(self) -> TimelineSnapshot {
        TimelineSnapshot {
            timeline: self.timeline,
            clusters: self.clusters.into_values().collect(),
            durations: self.durations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimelineSnapshot {
    /// Applications in scan order.
    pub timeline: Vec<AppTimeRange>,
    /// Clusters in ascending numeric id order.
    pub clusters: Vec<ClusterSummary>,
    /// Job durations in seconds, per cluster id.
    pub durations: BTreeMap<String, Vec<i64>>,
}

impl TimelineSnapshot {
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn num_applications(&self) -> u64 {
        self.clusters.iter().map(|c| c.num_applications).sum()
    }

    pub fn average_applications_per_cluster(&self) -> f64 {
        if self.clusters.is_empty() {
            return 0.0;
        }
        self.num_applications() as f64 / self.clusters.len() as f64
    }

    /// Clusters by application count, busiest first; ties keep id order.
    pub fn ranked_clusters(&self) -> Vec<&ClusterSummary> {
        let mut ranked: Vec<_> = self.clusters.iter().collect();
        ranked.sort_by(|a, b| b.num_applications.cmp(&a.num_applications));
        ranked
    }

    pub fn busiest_cluster(&self) -> Option<&ClusterSummary> {
        self.ranked_clusters().into_iter().next()
    }

    pub fn durations_for(&self, cluster_id: &str) -> &[i64] {
        self.durations
            .get(cluster_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Scans every application directory under `root`, in name order.
///
/// Applications without any timestamped line are left out of the result.
/// A directory whose name is not a valid application id aborts the scan.
pub fn collect_timeline(
    root: &Path,
    classifier: &LineClassifier,
) -> Result<TimelineSnapshot, CorpusError> {
    let mut agg = TimelineAggregator::new();
    let mut skipped = 0usize;

    for dir in application_dirs(root)? {
        match scan_application(&dir, classifier)? {
            Some(range) => agg.push(range),
            None => {
                skipped += 1;
                tracing::debug!(dir = %dir.display(), "no timestamps found; application skipped");
            }
        }
    }

    if skipped > 0 {
        tracing::info!(skipped, "applications without timestamps left out of the timeline");
    }

    Ok(agg.snapshot())
}
