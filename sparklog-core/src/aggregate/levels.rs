use crate::aggregate::Reservoir;
use crate::classify::{LineClassifier, LogLevel, LogRecord};
use rand::Rng;
use std::path::Path;
use std::sync::Arc;

/// Per-level line counts for one pass over the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    per_level: [u64; 4],
    total_lines: u64,
    level_lines: u64,
}

impl LevelCounts {
    pub fn record(&mut self, level: Option<LogLevel>) {
        self.total_lines += 1;
        if let Some(level) = level {
            self.per_level[level.index()] += 1;
            self.level_lines += 1;
        }
    }

    pub fn get(&self, level: LogLevel) -> u64 {
        self.per_level[level.index()]
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn level_lines(&self) -> u64 {
        self.level_lines
    }

    /// Levels seen at least once.
    pub fn distinct_levels(&self) -> usize {
        self.per_level.iter().filter(|c| **c > 0).count()
    }

    /// `(level, count)` in report order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, u64)> + '_ {
        LogLevel::ALL.into_iter().map(|l| (l, self.get(l)))
    }
}

/// Single-pass level statistics: counts plus a reservoir of lines that
/// carry a level.
pub struct LevelAggregator<R> {
    counts: LevelCounts,
    sample: Reservoir<LogRecord, R>,
}

impl<R: Rng> LevelAggregator<R> {
    pub fn new(sample_size: usize, rng: R) -> Self {
        Self {
            counts: LevelCounts::default(),
            sample: Reservoir::new(sample_size, rng),
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        self.counts.record(record.level);

        if record.level.is_some() {
            self.sample.offer(record);
        }
    }

    pub fn counts(&self) -> &LevelCounts {
        &self.counts
    }

    pub fn snapshot(self) -> LevelSnapshot {
        LevelSnapshot {
            counts: self.counts,
            sample: self.sample.into_items(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LevelSnapshot {
    pub counts: LevelCounts,
    pub sample: Vec<LogRecord>,
}

/// Runs one pass over `lines`, classifying each by level and folding it into
/// a [`LevelAggregator`]. Timestamps are not parsed.
pub fn collect_levels<I, R>(
    lines: I,
    classifier: &LineClassifier,
    sample_size: usize,
    rng: R,
) -> LevelSnapshot
where
    I: IntoIterator<Item = (Arc<Path>, String)>,
    R: Rng,
{
    let mut agg = LevelAggregator::new(sample_size, rng);
    for (path, line) in lines {
        agg.push(classifier.classify_level(path, line));
    }
    agg.snapshot()
}
