use crate::classify::{LineClassifier, LogLevel, extract_level, extract_timestamp};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::Arc;

//-----------------------------------------------------------------------------
// Level extraction
//-----------------------------------------------------------------------------

#[test]
fn level_found_after_timestamp_prefix() {
    assert_eq!(
        extract_level("17/03/29 10:04:41 INFO Started"),
        Some(LogLevel::Info)
    );
}

#[test]
fn level_requires_word_boundaries() {
    assert_eq!(extract_level("random text ERRORISH"), None);
    assert_eq!(extract_level("xWARN and DEBUGGER"), None);
}

#[test]
fn first_level_token_wins() {
    assert_eq!(
        extract_level("WARN retrying after ERROR from executor"),
        Some(LogLevel::Warn)
    );
}

#[test]
fn level_tokens_are_case_sensitive() {
    assert_eq!(extract_level("info: lower case is not a level"), None);
}

#[test]
fn level_accepts_punctuation_boundaries() {
    assert_eq!(extract_level("[ERROR] disk full"), Some(LogLevel::Error));
    assert_eq!(extract_level("level=DEBUG,"), Some(LogLevel::Debug));
}

#[test]
fn level_display_matches_report_tokens() {
    let rendered: Vec<String> = LogLevel::ALL.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["INFO", "WARN", "ERROR", "DEBUG"]);
}

//-----------------------------------------------------------------------------
// Timestamp extraction
//-----------------------------------------------------------------------------

#[test]
fn timestamp_is_year_first_in_the_2000s() {
    let ts = extract_timestamp("17/03/29 10:04:41 INFO Started", 2000).unwrap();

    assert_eq!(
        ts,
        NaiveDate::from_ymd_opt(2017, 3, 29)
            .unwrap()
            .and_hms_opt(10, 4, 41)
            .unwrap()
    );
    assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-03-29 10:04:41");
}

#[test]
fn timestamp_must_start_the_line() {
    assert_eq!(extract_timestamp(" 17/03/29 10:04:41 INFO", 2000), None);
    assert_eq!(extract_timestamp("at 17/03/29 10:04:41", 2000), None);
}

#[test]
fn timestamp_missing_from_plain_text() {
    assert_eq!(extract_timestamp("random text ERRORISH", 2000), None);
}

#[test]
fn timestamp_rejects_impossible_dates() {
    assert_eq!(extract_timestamp("17/13/01 10:00:00", 2000), None);
    assert_eq!(extract_timestamp("17/02/30 10:00:00", 2000), None);
    assert_eq!(extract_timestamp("17/02/01 25:00:00", 2000), None);
}

#[test]
fn timestamp_allows_wide_whitespace_between_date_and_time() {
    assert!(extract_timestamp("16/01/05\t 08:00:00 rest", 2000).is_some());
}

#[test]
fn century_base_is_configurable() {
    let ts = extract_timestamp("99/12/31 23:59:59", 1900).unwrap();

    assert_eq!(ts.format("%Y").to_string(), "1999");
}

#[test]
fn century_base_out_of_range_yields_no_timestamp() {
    assert_eq!(extract_timestamp("99/01/01 00:00:00", i32::MAX - 10), None);
    assert_eq!(extract_timestamp("17/03/29 10:04:41", i32::MAX), None);
    assert_eq!(extract_timestamp("17/03/29 10:04:41", i32::MIN), None);
}

//-----------------------------------------------------------------------------
// Classifier
//-----------------------------------------------------------------------------

#[test]
fn classify_fills_both_fields() {
    // Arrange
    let classifier = LineClassifier::default();
    let path: Arc<Path> = Arc::from(Path::new("application_1_1/stderr.log"));

    // Act
    let record = classifier.classify(path.clone(), "17/03/29 10:04:41 INFO Started".into());

    // Assert
    assert_eq!(record.source_path, path);
    assert_eq!(record.level, Some(LogLevel::Info));
    assert_eq!(
        record.timestamp.map(|t| t.to_string()),
        Some("2017-03-29 10:04:41".to_string())
    );
}

#[test]
fn classify_unmatched_line_is_not_an_error() {
    let classifier = LineClassifier::default();

    let record = classifier.classify(Arc::from(Path::new("x.log")), "random text ERRORISH".into());

    assert_eq!(record.level, None);
    assert_eq!(record.timestamp, None);
    assert_eq!(record.raw_text, "random text ERRORISH");
}

#[test]
fn classify_level_skips_the_timestamp() {
    // Arrange
    let classifier = LineClassifier::default();

    // Act
    let record = classifier.classify_level(
        Arc::from(Path::new("x.log")),
        "17/03/29 10:04:41 WARN slow task".into(),
    );

    // Assert
    assert_eq!(record.level, Some(LogLevel::Warn));
    assert_eq!(record.timestamp, None);
    assert_eq!(record.raw_text, "17/03/29 10:04:41 WARN slow task");
}
