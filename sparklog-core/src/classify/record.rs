use crate::classify::{DEFAULT_CENTURY_BASE, LogLevel, extract_level, extract_timestamp};
use chrono::NaiveDateTime;
use std::path::Path;
use std::sync::Arc;

/// One classified line. Lives for a single aggregation step unless the
/// reservoir keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub source_path: Arc<Path>,
    pub raw_text: String,
    pub level: Option<LogLevel>,
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    century_base: i32,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CENTURY_BASE)
    }
}

impl LineClassifier {
    pub fn new(century_base: i32) -> Self {
        Self { century_base }
    }

    pub fn century_base(&self) -> i32 {
        self.century_base
    }

    pub fn level(&self, line: &str) -> Option<LogLevel> {
        extract_level(line)
    }

    pub fn timestamp(&self, line: &str) -> Option<NaiveDateTime> {
        extract_timestamp(line, self.century_base)
    }

    /// Level only. `timestamp` is left `None`; passes that never look at
    /// time skip the date parse this way.
    pub fn classify_level(&self, source_path: Arc<Path>, raw_text: String) -> LogRecord {
        LogRecord {
            level: self.level(&raw_text),
            timestamp: None,
            source_path,
            raw_text,
        }
    }

    pub fn classify(&self, source_path: Arc<Path>, raw_text: String) -> LogRecord {
        LogRecord {
            level: self.level(&raw_text),
            timestamp: self.timestamp(&raw_text),
            source_path,
            raw_text,
        }
    }
}
