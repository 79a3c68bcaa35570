use crate::classify::LineClassifier;
use crate::corpus::{ApplicationId, CorpusError, LineReader, discover};
use chrono::{NaiveDateTime, TimeDelta};
use std::path::Path;

/// Running min/max over observed instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRangeTracker {
    bounds: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl TimeRangeTracker {
    pub fn observe(&mut self, ts: NaiveDateTime) {
        self.bounds = Some(match self.bounds {
            None => (ts, ts),
            Some((start, end)) => (start.min(ts), end.max(ts)),
        });
    }

    /// `None` until at least one instant has been observed.
    pub fn range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.bounds
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTimeRange {
    pub application: ApplicationId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AppTimeRange {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

pub const APPLICATION_LOG_GLOB: &str = "*.log";

/// Scans the `*.log` files directly inside one application directory.
///
/// The directory name must parse as an [`ApplicationId`]; anything else
/// means the corpus layout is not what we expect, and the scan fails.
/// A directory without a single timestamped line yields `Ok(None)`.
pub fn scan_application(
    dir: &Path,
    classifier: &LineClassifier,
) -> Result<Option<AppTimeRange>, CorpusError> {
    let application = ApplicationId::from_dir(dir)?;
    let mut tracker = TimeRangeTracker::default();

    for log_path in discover(dir, APPLICATION_LOG_GLOB)? {
        let reader = match LineReader::open(&log_path) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(error = %e, path = %log_path.display(), "skipping unreadable log file");
                continue;
            }
        };

        for line in reader {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, path = %log_path.display(), "read failed; skipping rest of file");
                    break;
                }
            };

            if let Some(ts) = classifier.timestamp(&line) {
                tracker.observe(ts);
            }
        }
    }

    Ok(tracker.range().map(|(start, end)| AppTimeRange {
        application,
        start,
        end,
    }))
}
