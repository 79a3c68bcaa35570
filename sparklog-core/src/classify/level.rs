use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(INFO|WARN|ERROR|DEBUG)\b").expect("level pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    /// Report order.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            "DEBUG" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First standalone level token anywhere in the line.
///
/// Tokens embedded in longer words (`ERRORISH`, `xINFO`) do not count.
pub fn extract_level(line: &str) -> Option<LogLevel> {
    LEVEL_RE
        .captures(line)
        .and_then(|caps| LogLevel::from_token(&caps[1]))
}
