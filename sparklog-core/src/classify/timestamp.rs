use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Two-digit years are offset from this year unless configured otherwise.
///
/// 00-99 map onto 2000-2099. That only holds because the Spark corpus spans
/// 2015-2017; a corpus from another century needs a different base.
pub const DEFAULT_CENTURY_BASE: i32 = 2000;

// yy/MM/dd HH:mm:ss at the very start of the line
static TS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{2})\s+([0-9]{2}):([0-9]{2}):([0-9]{2})")
        .expect("timestamp pattern is valid")
});

/// Parses a leading `yy/MM/dd HH:mm:ss` timestamp.
///
/// Returns `None` when the line does not start with the pattern, or when the
/// digits do not form a real calendar date and time. A `century_base` that
/// pushes the year out of range also yields `None`.
pub fn extract_timestamp(line: &str, century_base: i32) -> Option<NaiveDateTime> {
    let caps = TS_RE.captures(line)?;
    let field = |i: usize| caps[i].parse::<u32>().ok();

    let year = century_base.checked_add(field(1)? as i32)?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    date.and_hms_opt(field(4)?, field(5)?, field(6)?)
}
